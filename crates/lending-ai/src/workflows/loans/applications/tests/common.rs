use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::loans::applications::domain::{
    ApplicationId, CreditTier, EmploymentStatus, LoanApplication,
};
use crate::workflows::loans::applications::evaluation::{EligibilityEngine, EvaluationConfig};
use crate::workflows::loans::applications::repository::{
    ApplicationRecord, ApplicationRepository, FollowUpNotice, NoticeError, NoticePublisher,
    RepositoryError,
};
use crate::workflows::loans::applications::{application_router, LoanApplicationService};

/// Sidebar scenario: DTI 24.00 with every gate passing.
pub(super) fn approved_application() -> LoanApplication {
    LoanApplication {
        monthly_income: 50_000.0,
        monthly_debt: 12_000.0,
        loan_amount: 100_000.0,
        employment: EmploymentStatus::FullTime,
        credit_tier: CreditTier::Good,
    }
}

/// Sidebar scenario: DTI 40.00, inside the review band.
pub(super) fn review_application() -> LoanApplication {
    LoanApplication {
        monthly_income: 40_000.0,
        monthly_debt: 16_000.0,
        loan_amount: 100_000.0,
        employment: EmploymentStatus::FullTime,
        credit_tier: CreditTier::Fair,
    }
}

/// Sidebar scenario: DTI 62.86, above the rejection threshold.
pub(super) fn overextended_application() -> LoanApplication {
    LoanApplication {
        monthly_income: 35_000.0,
        monthly_debt: 22_000.0,
        loan_amount: 100_000.0,
        employment: EmploymentStatus::FullTime,
        credit_tier: CreditTier::Good,
    }
}

/// Loan-to-income scenario: DTI would approve but the request exceeds the
/// five-times-annual-income ceiling of 3,000,000.
pub(super) fn ceiling_application() -> LoanApplication {
    LoanApplication {
        monthly_income: 50_000.0,
        monthly_debt: 5_000.0,
        loan_amount: 4_000_000.0,
        employment: EmploymentStatus::FullTime,
        credit_tier: CreditTier::Excellent,
    }
}

/// Fails every gate at once; only the employment reason should surface.
pub(super) fn unemployed_application() -> LoanApplication {
    LoanApplication {
        monthly_income: 10_000.0,
        monthly_debt: 9_000.0,
        loan_amount: 2_000_000.0,
        employment: EmploymentStatus::Unemployed,
        credit_tier: CreditTier::VeryPoor,
    }
}

/// Income of 10,000 means the debt figure divided by 100 is the DTI
/// percentage, which keeps band-boundary tests legible.
pub(super) fn application_with_debt(monthly_debt: f64) -> LoanApplication {
    LoanApplication {
        monthly_income: 10_000.0,
        monthly_debt,
        loan_amount: 50_000.0,
        employment: EmploymentStatus::FullTime,
        credit_tier: CreditTier::Excellent,
    }
}

pub(super) fn evaluation_config() -> EvaluationConfig {
    EvaluationConfig::default()
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(evaluation_config())
}

pub(super) fn build_service() -> (
    LoanApplicationService<MemoryRepository, MemoryNotices>,
    Arc<MemoryRepository>,
    Arc<MemoryNotices>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notices = Arc::new(MemoryNotices::default());
    let service =
        LoanApplicationService::new(repository.clone(), notices.clone(), evaluation_config());
    (service, repository, notices)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.application_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotices {
    events: Arc<Mutex<Vec<FollowUpNotice>>>,
}

impl MemoryNotices {
    pub(super) fn events(&self) -> Vec<FollowUpNotice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

impl NoticePublisher for MemoryNotices {
    fn publish(&self, notice: FollowUpNotice) -> Result<(), NoticeError> {
        self.events
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl ApplicationRepository for ConflictRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn application_router_with_service(
    service: LoanApplicationService<MemoryRepository, MemoryNotices>,
) -> axum::Router {
    application_router(Arc::new(service))
}
