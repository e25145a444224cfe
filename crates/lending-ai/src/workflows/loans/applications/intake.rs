use super::domain::LoanApplication;

/// Validation errors raised by the intake guard before evaluation runs.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("monthly income must be positive (found {found})")]
    NonPositiveIncome { found: f64 },
    #[error("monthly debt cannot be negative (found {found})")]
    NegativeDebt { found: f64 },
    #[error("requested loan amount must be positive (found {found})")]
    NonPositiveLoanAmount { found: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },
}

/// Guard enforcing the host-side validation contract: the engine only ever
/// sees well-formed applications.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Validate a raw submission, returning it unchanged when acceptable.
    pub fn screen(&self, application: LoanApplication) -> Result<LoanApplication, IntakeViolation> {
        for (field, value) in [
            ("monthly_income", application.monthly_income),
            ("monthly_debt", application.monthly_debt),
            ("loan_amount", application.loan_amount),
        ] {
            if !value.is_finite() {
                return Err(IntakeViolation::NonFiniteAmount { field });
            }
        }

        if application.monthly_income <= 0.0 {
            return Err(IntakeViolation::NonPositiveIncome {
                found: application.monthly_income,
            });
        }

        if application.monthly_debt < 0.0 {
            return Err(IntakeViolation::NegativeDebt {
                found: application.monthly_debt,
            });
        }

        if application.loan_amount <= 0.0 {
            return Err(IntakeViolation::NonPositiveLoanAmount {
                found: application.loan_amount,
            });
        }

        Ok(application)
    }
}
