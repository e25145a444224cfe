use serde::{Deserialize, Serialize};

/// Threshold dials backing the eligibility gate chain.
///
/// Defaults reproduce the standard underwriting rubric: approve at a DTI of
/// 36% or below, route 36-43% to review, require a 650 credit floor, and cap
/// the requested amount at five times annual income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub approve_dti_max: f64,
    pub review_dti_max: f64,
    pub minimum_credit_score: u16,
    pub income_multiple_cap: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            approve_dti_max: 36.0,
            review_dti_max: 43.0,
            minimum_credit_score: 650,
            income_multiple_cap: 5.0,
        }
    }
}
