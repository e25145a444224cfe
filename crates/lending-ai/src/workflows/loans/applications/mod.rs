//! Loan application intake, eligibility evaluation, and decision plumbing.
//!
//! The evaluation engine is a pure function over a single application; the
//! repository, service, and router wrap it with the persistence and HTTP
//! surface the screening API exposes.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, CreditTier, EmploymentStatus, LoanApplication, LoanApplicationStatus,
};
pub use evaluation::{
    debt_to_income, DecisionFactor, DecisionResult, EligibilityEngine, EvaluationConfig,
    FactorNote, LoanDecision, RejectionReason,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatusView, FollowUpNotice, NoticeError,
    NoticePublisher, RepositoryError,
};
pub use router::application_router;
pub use service::{ApplicationServiceError, LoanApplicationService};
