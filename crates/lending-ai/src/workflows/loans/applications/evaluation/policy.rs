use super::super::domain::{EmploymentStatus, LoanApplication};
use super::config::EvaluationConfig;
use super::rules::{format_currency, GateSignals};
use serde::{Deserialize, Serialize};

/// Adjudication outcome for a screened loan application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "reason")]
pub enum LoanDecision {
    Approved,
    Conditional,
    Rejected(RejectionReason),
}

impl LoanDecision {
    pub const fn label(&self) -> &'static str {
        match self {
            LoanDecision::Approved => "approved",
            LoanDecision::Conditional => "conditional",
            LoanDecision::Rejected(_) => "rejected",
        }
    }
}

/// Enumerates rejection reasons so adverse notices can cite the failed gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    IneligibleEmployment {
        status: EmploymentStatus,
    },
    InsufficientCredit {
        minimum_score: u16,
    },
    LoanExceedsIncomeCap {
        requested: f64,
        ceiling: f64,
        income_multiple: f64,
    },
    ExcessiveDebtBurden {
        dti: f64,
        maximum: f64,
    },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::IneligibleEmployment { status } => format!(
                "We require applicants to have full-time or self-employed status. \
                 Your current status: {}.",
                status.label()
            ),
            RejectionReason::InsufficientCredit { minimum_score } => format!(
                "Credit score does not meet minimum requirements. \
                 We need a score of at least {minimum_score}."
            ),
            RejectionReason::LoanExceedsIncomeCap {
                requested,
                ceiling,
                income_multiple,
            } => format!(
                "Requested amount ({}) exceeds the maximum of {:.0}x annual income ({}).",
                format_currency(*requested),
                income_multiple,
                format_currency(*ceiling)
            ),
            RejectionReason::ExcessiveDebtBurden { dti, maximum } => format!(
                "DTI ratio of {dti:.2}% exceeds our maximum threshold of {maximum:.0}%. \
                 Consider reducing debt or increasing income before reapplying."
            ),
        }
    }
}

/// Ordered gate chain; the first failing gate decides the outcome.
///
/// The order is load-bearing: an applicant can fail several gates at once and
/// only the first failure is surfaced. Employment, then credit, then the
/// loan-to-income ceiling, then the DTI bands.
pub(crate) fn decide_outcome(
    application: &LoanApplication,
    config: &EvaluationConfig,
    signals: &GateSignals,
) -> LoanDecision {
    if !application.employment.is_qualifying() {
        return LoanDecision::Rejected(RejectionReason::IneligibleEmployment {
            status: application.employment,
        });
    }

    if !application.credit_tier.meets_floor(config.minimum_credit_score) {
        return LoanDecision::Rejected(RejectionReason::InsufficientCredit {
            minimum_score: config.minimum_credit_score,
        });
    }

    if application.loan_amount > signals.loan_ceiling {
        return LoanDecision::Rejected(RejectionReason::LoanExceedsIncomeCap {
            requested: application.loan_amount,
            ceiling: signals.loan_ceiling,
            income_multiple: config.income_multiple_cap,
        });
    }

    // Band boundaries are inclusive on the lower decision: exactly 36.00 is
    // approved and exactly 43.00 is conditional.
    if signals.dti <= config.approve_dti_max {
        LoanDecision::Approved
    } else if signals.dti <= config.review_dti_max {
        LoanDecision::Conditional
    } else {
        LoanDecision::Rejected(RejectionReason::ExcessiveDebtBurden {
            dti: signals.dti,
            maximum: config.review_dti_max,
        })
    }
}

pub(crate) fn explain(decision: &LoanDecision, signals: &GateSignals) -> String {
    match decision {
        LoanDecision::Approved => format!(
            "Your DTI ratio is {:.2}%, which meets our standard approval criteria. \
             We'll need pay stubs, ID, and bank statements to proceed.",
            signals.dti
        ),
        LoanDecision::Conditional => format!(
            "Your DTI of {:.2}% requires additional review. You may need a co-signer \
             or extra documentation. A loan officer will reach out within 2 business days.",
            signals.dti
        ),
        LoanDecision::Rejected(reason) => reason.summary(),
    }
}
