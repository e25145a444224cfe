use super::common::*;
use crate::workflows::loans::applications::domain::{CreditTier, EmploymentStatus};
use crate::workflows::loans::applications::{
    debt_to_income, DecisionFactor, LoanDecision, RejectionReason,
};

#[test]
fn dti_is_rounded_to_two_decimals() {
    assert_eq!(debt_to_income(35_000.0, 22_000.0), 62.86);
    assert_eq!(debt_to_income(50_000.0, 12_000.0), 24.0);
    assert_eq!(debt_to_income(3.0, 1.0), 33.33);
}

#[test]
fn dti_falls_back_to_zero_without_income() {
    assert_eq!(debt_to_income(0.0, 5_000.0), 0.0);
    assert_eq!(debt_to_income(-100.0, 5_000.0), 0.0);
}

#[test]
fn dti_at_approval_boundary_is_approved() {
    let result = engine().evaluate(&application_with_debt(3_600.0));
    assert_eq!(result.dti_ratio, 36.0);
    assert_eq!(result.decision, LoanDecision::Approved);
}

#[test]
fn dti_just_above_approval_boundary_needs_review() {
    let result = engine().evaluate(&application_with_debt(3_601.0));
    assert_eq!(result.dti_ratio, 36.01);
    assert_eq!(result.decision, LoanDecision::Conditional);
}

#[test]
fn dti_at_review_boundary_needs_review() {
    let result = engine().evaluate(&application_with_debt(4_300.0));
    assert_eq!(result.dti_ratio, 43.0);
    assert_eq!(result.decision, LoanDecision::Conditional);
}

#[test]
fn dti_just_above_review_boundary_is_rejected() {
    let result = engine().evaluate(&application_with_debt(4_301.0));
    assert_eq!(result.dti_ratio, 43.01);
    match result.decision {
        LoanDecision::Rejected(RejectionReason::ExcessiveDebtBurden { dti, maximum }) => {
            assert_eq!(dti, 43.01);
            assert_eq!(maximum, 43.0);
        }
        other => panic!("expected debt burden rejection, got {other:?}"),
    }
}

#[test]
fn strong_application_is_approved() {
    let result = engine().evaluate(&approved_application());

    assert_eq!(result.decision, LoanDecision::Approved);
    assert_eq!(result.dti_ratio, 24.0);
    assert!(result.explanation.contains("24.00%"));
    assert!(result.explanation.contains("pay stubs"));
}

#[test]
fn mid_band_application_goes_to_review() {
    let result = engine().evaluate(&review_application());

    assert_eq!(result.decision, LoanDecision::Conditional);
    assert_eq!(result.dti_ratio, 40.0);
    assert!(result.explanation.contains("2 business days"));
}

#[test]
fn overextended_application_is_rejected_on_dti() {
    let result = engine().evaluate(&overextended_application());

    assert_eq!(result.dti_ratio, 62.86);
    assert!(matches!(
        result.decision,
        LoanDecision::Rejected(RejectionReason::ExcessiveDebtBurden { .. })
    ));
    assert!(result.explanation.contains("62.86%"));
    assert!(result.explanation.contains("43%"));
}

#[test]
fn loan_ceiling_overrides_a_passing_dti() {
    let result = engine().evaluate(&ceiling_application());

    match &result.decision {
        LoanDecision::Rejected(RejectionReason::LoanExceedsIncomeCap {
            requested,
            ceiling,
            ..
        }) => {
            assert_eq!(*requested, 4_000_000.0);
            assert_eq!(*ceiling, 3_000_000.0);
        }
        other => panic!("expected income cap rejection, got {other:?}"),
    }

    // DTI alone would have approved; the rationale must carry both amounts
    // formatted as currency.
    assert_eq!(result.dti_ratio, 10.0);
    assert!(result.explanation.contains("₹4,000,000"));
    assert!(result.explanation.contains("₹3,000,000"));
}

#[test]
fn employment_gate_fires_before_every_other_gate() {
    let result = engine().evaluate(&unemployed_application());

    match &result.decision {
        LoanDecision::Rejected(RejectionReason::IneligibleEmployment { status }) => {
            assert_eq!(*status, EmploymentStatus::Unemployed);
        }
        other => panic!("expected employment rejection, got {other:?}"),
    }
    assert!(result.explanation.contains("Unemployed"));
}

#[test]
fn part_time_and_retired_applicants_are_rejected() {
    for status in [EmploymentStatus::PartTime, EmploymentStatus::Retired] {
        let mut application = approved_application();
        application.employment = status;

        let result = engine().evaluate(&application);
        match result.decision {
            LoanDecision::Rejected(RejectionReason::IneligibleEmployment { status: found }) => {
                assert_eq!(found, status);
            }
            other => panic!("expected employment rejection for {status:?}, got {other:?}"),
        }
    }
}

#[test]
fn credit_gate_rejects_sub_650_tiers() {
    for tier in [CreditTier::Poor, CreditTier::VeryPoor] {
        let mut application = approved_application();
        application.credit_tier = tier;

        let result = engine().evaluate(&application);
        match result.decision {
            LoanDecision::Rejected(RejectionReason::InsufficientCredit { minimum_score }) => {
                assert_eq!(minimum_score, 650);
            }
            other => panic!("expected credit rejection for {tier:?}, got {other:?}"),
        }
        assert!(result.explanation.contains("at least 650"));
    }
}

#[test]
fn fair_tier_clears_the_credit_gate() {
    let mut application = approved_application();
    application.credit_tier = CreditTier::Fair;

    let result = engine().evaluate(&application);
    assert_eq!(result.decision, LoanDecision::Approved);
}

#[test]
fn dti_is_reported_even_when_an_earlier_gate_rejects() {
    let mut application = overextended_application();
    application.employment = EmploymentStatus::Retired;

    let result = engine().evaluate(&application);

    assert!(matches!(
        result.decision,
        LoanDecision::Rejected(RejectionReason::IneligibleEmployment { .. })
    ));
    assert_eq!(result.dti_ratio, 62.86);
}

#[test]
fn every_gate_leaves_a_factor_note() {
    let result = engine().evaluate(&unemployed_application());

    assert_eq!(result.factors.len(), 4);
    for factor in [
        DecisionFactor::Employment,
        DecisionFactor::CreditHistory,
        DecisionFactor::LoanToIncome,
        DecisionFactor::DebtToIncome,
    ] {
        assert!(result.factors.iter().any(|note| note.factor == factor));
    }
    assert!(result
        .factors
        .iter()
        .any(|note| note.factor == DecisionFactor::Employment && !note.passed));
}
