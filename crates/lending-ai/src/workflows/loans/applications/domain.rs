use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted loan applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Employment categories collected on the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    FullTime,
    PartTime,
    SelfEmployed,
    Unemployed,
    Retired,
}

impl EmploymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::FullTime => "Full-time",
            EmploymentStatus::PartTime => "Part-time",
            EmploymentStatus::SelfEmployed => "Self-employed",
            EmploymentStatus::Unemployed => "Unemployed",
            EmploymentStatus::Retired => "Retired",
        }
    }

    /// Only full-time and self-employed applicants clear the employment gate.
    pub const fn is_qualifying(self) -> bool {
        matches!(
            self,
            EmploymentStatus::FullTime | EmploymentStatus::SelfEmployed
        )
    }
}

/// Self-reported credit score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl CreditTier {
    pub const fn label(self) -> &'static str {
        match self {
            CreditTier::Excellent => "Excellent (750+)",
            CreditTier::Good => "Good (700-749)",
            CreditTier::Fair => "Fair (650-699)",
            CreditTier::Poor => "Poor (600-649)",
            CreditTier::VeryPoor => "Very Poor (below 600)",
        }
    }

    /// Lowest credit score covered by the band.
    pub const fn floor_score(self) -> u16 {
        match self {
            CreditTier::Excellent => 750,
            CreditTier::Good => 700,
            CreditTier::Fair => 650,
            CreditTier::Poor => 600,
            CreditTier::VeryPoor => 0,
        }
    }

    pub const fn meets_floor(self, minimum_score: u16) -> bool {
        self.floor_score() >= minimum_score
    }
}

/// Immutable applicant snapshot evaluated by the eligibility engine.
///
/// Amounts are monthly figures in the applicant's currency; validation of
/// sign and finiteness happens in the intake guard, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub monthly_income: f64,
    pub monthly_debt: f64,
    pub loan_amount: f64,
    pub employment: EmploymentStatus,
    pub credit_tier: CreditTier,
}

/// High level status tracked throughout the loan application workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanApplicationStatus {
    Submitted,
    UnderReview,
    Approved,
    NeedsReview,
    Declined,
}

impl LoanApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LoanApplicationStatus::Submitted => "submitted",
            LoanApplicationStatus::UnderReview => "under_review",
            LoanApplicationStatus::Approved => "approved",
            LoanApplicationStatus::NeedsReview => "needs_review",
            LoanApplicationStatus::Declined => "declined",
        }
    }
}
