use lending_ai::workflows::loans::applications::{
    ApplicationId, ApplicationRecord, ApplicationRepository, CreditTier, EmploymentStatus,
    FollowUpNotice, NoticeError, NoticePublisher, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
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
        if guard.contains_key(&record.application_id) {
            guard.insert(record.application_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.decision.is_none())
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryNoticePublisher {
    events: Arc<Mutex<Vec<FollowUpNotice>>>,
}

impl NoticePublisher for InMemoryNoticePublisher {
    fn publish(&self, notice: FollowUpNotice) -> Result<(), NoticeError> {
        let mut guard = self.events.lock().expect("notice mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryNoticePublisher {
    pub(crate) fn events(&self) -> Vec<FollowUpNotice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}

pub(crate) fn parse_employment(raw: &str) -> Result<EmploymentStatus, String> {
    match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "full-time" | "fulltime" => Ok(EmploymentStatus::FullTime),
        "part-time" | "parttime" => Ok(EmploymentStatus::PartTime),
        "self-employed" | "selfemployed" => Ok(EmploymentStatus::SelfEmployed),
        "unemployed" => Ok(EmploymentStatus::Unemployed),
        "retired" => Ok(EmploymentStatus::Retired),
        other => Err(format!(
            "unknown employment status '{other}' (expected full-time, part-time, \
             self-employed, unemployed, or retired)"
        )),
    }
}

pub(crate) fn parse_credit_tier(raw: &str) -> Result<CreditTier, String> {
    match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "excellent" => Ok(CreditTier::Excellent),
        "good" => Ok(CreditTier::Good),
        "fair" => Ok(CreditTier::Fair),
        "poor" => Ok(CreditTier::Poor),
        "very-poor" | "verypoor" => Ok(CreditTier::VeryPoor),
        other => Err(format!(
            "unknown credit tier '{other}' (expected excellent, good, fair, poor, or very-poor)"
        )),
    }
}
