mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::{LoanDecision, RejectionReason};
pub use rules::debt_to_income;

use super::domain::LoanApplication;
use policy::{decide_outcome, explain};
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying the configured gate chain to an application.
pub struct EligibilityEngine {
    config: EvaluationConfig,
}

impl EligibilityEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn evaluate(&self, application: &LoanApplication) -> DecisionResult {
        let (factors, signals) = rules::assess(application, &self.config);
        let decision = decide_outcome(application, &self.config, &signals);
        let explanation = explain(&decision, &signals);

        DecisionResult {
            decision,
            dti_ratio: signals.dti,
            explanation,
            factors,
        }
    }
}

/// Evaluation output: the decision plus the informational decision trail.
///
/// `dti_ratio` is populated on every path, including rejections decided before
/// the DTI gate is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    #[serde(flatten)]
    pub decision: LoanDecision,
    pub dti_ratio: f64,
    pub explanation: String,
    pub factors: Vec<FactorNote>,
}

/// Discrete gate assessment, allowing transparent audits of a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorNote {
    pub factor: DecisionFactor,
    pub passed: bool,
    pub note: String,
}

/// Factors permitted in the eligibility rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionFactor {
    Employment,
    CreditHistory,
    LoanToIncome,
    DebtToIncome,
}
