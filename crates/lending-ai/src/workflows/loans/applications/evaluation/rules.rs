use super::super::domain::LoanApplication;
use super::config::EvaluationConfig;
use super::{DecisionFactor, FactorNote};

/// Derived figures consumed by the gate chain.
pub(crate) struct GateSignals {
    pub dti: f64,
    pub annual_income: f64,
    pub loan_ceiling: f64,
}

/// Debt-to-income ratio as a percentage, rounded to two decimal places.
///
/// Non-positive income yields 0.0 rather than an error so the ratio stays
/// total over every application the intake guard can produce.
pub fn debt_to_income(monthly_income: f64, monthly_debt: f64) -> f64 {
    if monthly_income > 0.0 {
        round_two((monthly_debt / monthly_income) * 100.0)
    } else {
        0.0
    }
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Currency rendering for rationale text: leading symbol, grouped thousands,
/// no decimal places.
pub(crate) fn format_currency(amount: f64) -> String {
    let rounded = amount.round().abs() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount < 0.0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Work through every gate and record an informational note for each one,
/// regardless of where the decision ultimately short-circuits.
pub(crate) fn assess(
    application: &LoanApplication,
    config: &EvaluationConfig,
) -> (Vec<FactorNote>, GateSignals) {
    let dti = debt_to_income(application.monthly_income, application.monthly_debt);
    let annual_income = application.monthly_income * 12.0;
    let loan_ceiling = annual_income * config.income_multiple_cap;

    let mut notes = Vec::with_capacity(4);

    let employment_ok = application.employment.is_qualifying();
    notes.push(FactorNote {
        factor: DecisionFactor::Employment,
        passed: employment_ok,
        note: if employment_ok {
            format!("{} employment accepted", application.employment.label())
        } else {
            format!(
                "{} status does not meet the stable employment requirement",
                application.employment.label()
            )
        },
    });

    let credit_ok = application.credit_tier.meets_floor(config.minimum_credit_score);
    notes.push(FactorNote {
        factor: DecisionFactor::CreditHistory,
        passed: credit_ok,
        note: if credit_ok {
            format!(
                "{} clears the {} minimum",
                application.credit_tier.label(),
                config.minimum_credit_score
            )
        } else {
            format!(
                "{} falls below the {} minimum",
                application.credit_tier.label(),
                config.minimum_credit_score
            )
        },
    });

    let within_ceiling = application.loan_amount <= loan_ceiling;
    notes.push(FactorNote {
        factor: DecisionFactor::LoanToIncome,
        passed: within_ceiling,
        note: if within_ceiling {
            format!(
                "requested {} within the {} ceiling",
                format_currency(application.loan_amount),
                format_currency(loan_ceiling)
            )
        } else {
            format!(
                "requested {} exceeds the {} ceiling",
                format_currency(application.loan_amount),
                format_currency(loan_ceiling)
            )
        },
    });

    let dti_ok = dti <= config.review_dti_max;
    notes.push(FactorNote {
        factor: DecisionFactor::DebtToIncome,
        passed: dti_ok,
        note: if dti <= config.approve_dti_max {
            format!("DTI {dti:.2}% within the {:.0}% approval band", config.approve_dti_max)
        } else if dti_ok {
            format!(
                "DTI {dti:.2}% in the {:.0}-{:.0}% review band",
                config.approve_dti_max, config.review_dti_max
            )
        } else {
            format!("DTI {dti:.2}% above the {:.0}% maximum", config.review_dti_max)
        },
    });

    let signals = GateSignals {
        dti,
        annual_income,
        loan_ceiling,
    };

    (notes, signals)
}
