use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Local;

use super::domain::{ApplicationId, LoanApplication, LoanApplicationStatus};
use super::evaluation::{DecisionResult, EligibilityEngine, EvaluationConfig, LoanDecision};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{
    ApplicationRecord, ApplicationRepository, FollowUpNotice, NoticeError, NoticePublisher,
    RepositoryError,
};

/// Service composing the intake guard, repository, and eligibility engine.
pub struct LoanApplicationService<R, N> {
    guard: IntakeGuard,
    repository: Arc<R>,
    notices: Arc<N>,
    engine: Arc<EligibilityEngine>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("loan-{id:06}"))
}

impl<R, N> LoanApplicationService<R, N>
where
    R: ApplicationRepository + 'static,
    N: NoticePublisher + 'static,
{
    pub fn new(repository: Arc<R>, notices: Arc<N>, config: EvaluationConfig) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
            notices,
            engine: Arc::new(EligibilityEngine::new(config)),
        }
    }

    /// Submit a new application, returning the repository-backed record.
    pub fn submit(
        &self,
        application: LoanApplication,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let application = self.guard.screen(application)?;

        let record = ApplicationRecord {
            application_id: next_application_id(),
            application,
            status: LoanApplicationStatus::Submitted,
            received_on: Local::now().date_naive(),
            decision: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Evaluate a pending application and persist the outcome.
    pub fn decide(
        &self,
        application_id: &ApplicationId,
    ) -> Result<DecisionResult, ApplicationServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        let result = self.engine.evaluate(&record.application);

        record.status = match result.decision {
            LoanDecision::Approved => LoanApplicationStatus::Approved,
            LoanDecision::Conditional => LoanApplicationStatus::NeedsReview,
            LoanDecision::Rejected(_) => LoanApplicationStatus::Declined,
        };
        record.decision = Some(result.clone());

        self.repository.update(record)?;

        if matches!(result.decision, LoanDecision::Conditional) {
            let mut details = BTreeMap::new();
            details.insert("sla".to_string(), "2 business days".to_string());
            details.insert("dti".to_string(), format!("{:.2}", result.dti_ratio));
            self.notices.publish(FollowUpNotice {
                template: "loan_officer_follow_up".to_string(),
                application_id: application_id.clone(),
                details,
            })?;
        }

        Ok(result)
    }

    /// Fetch an application and current status for API responses.
    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notice(#[from] NoticeError),
}
