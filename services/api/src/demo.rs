use crate::infra::{InMemoryApplicationRepository, InMemoryNoticePublisher};
use chrono::Local;
use clap::Args;
use lending_ai::config::AppConfig;
use lending_ai::error::AppError;
use lending_ai::workflows::loans::applications::{
    CreditTier, EligibilityEngine, EmploymentStatus, IntakeGuard, LoanApplication,
    LoanApplicationService,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Gross monthly income before taxes
    #[arg(long)]
    pub(crate) monthly_income: f64,
    /// Total of all monthly debt obligations
    #[arg(long)]
    pub(crate) monthly_debt: f64,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Employment status (full-time, part-time, self-employed, unemployed, retired)
    #[arg(long, value_parser = crate::infra::parse_employment)]
    pub(crate) employment: EmploymentStatus,
    /// Credit tier (excellent, good, fair, poor, very-poor)
    #[arg(long = "credit", value_parser = crate::infra::parse_credit_tier)]
    pub(crate) credit_tier: CreditTier,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the per-gate factor notes for every scenario
    #[arg(long)]
    pub(crate) show_factors: bool,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = EligibilityEngine::new(config.screening);

    let application = IntakeGuard.screen(LoanApplication {
        monthly_income: args.monthly_income,
        monthly_debt: args.monthly_debt,
        loan_amount: args.loan_amount,
        employment: args.employment,
        credit_tier: args.credit_tier,
    })?;

    let result = engine.evaluate(&application);

    println!("Decision: {}", result.decision.label());
    println!("DTI ratio: {:.2}%", result.dti_ratio);
    println!("Rationale: {}", result.explanation);
    println!("Gate assessment:");
    for factor in &result.factors {
        let marker = if factor.passed { "pass" } else { "fail" };
        println!("  - {:?}: {} ({})", factor.factor, marker, factor.note);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let repository = Arc::new(InMemoryApplicationRepository::default());
    let notices = Arc::new(InMemoryNoticePublisher::default());
    let service = Arc::new(LoanApplicationService::new(
        repository,
        notices.clone(),
        config.screening,
    ));

    println!(
        "Loan screening demo ({})",
        Local::now().date_naive().format("%Y-%m-%d")
    );

    for (title, application) in demo_scenarios() {
        println!("\n{title}");
        println!(
            "  income {:.0} | debt {:.0} | requested {:.0} | {} | {}",
            application.monthly_income,
            application.monthly_debt,
            application.loan_amount,
            application.employment.label(),
            application.credit_tier.label()
        );

        let record = match service.submit(application) {
            Ok(record) => record,
            Err(err) => {
                println!("  Submission rejected: {err}");
                continue;
            }
        };
        println!(
            "  Received application {} -> status {}",
            record.application_id.0,
            record.status.label()
        );

        let result = match service.decide(&record.application_id) {
            Ok(result) => result,
            Err(err) => {
                println!("  Evaluation unavailable: {err}");
                continue;
            }
        };
        println!(
            "  Decision: {} (DTI {:.2}%)",
            result.decision.label(),
            result.dti_ratio
        );
        println!("  Rationale: {}", result.explanation);

        if args.show_factors {
            println!("  Gate assessment:");
            for factor in &result.factors {
                let marker = if factor.passed { "pass" } else { "fail" };
                println!("    - {:?}: {} ({})", factor.factor, marker, factor.note);
            }
        }
    }

    let queued = notices.events();
    println!("\nFollow-up notices queued: {}", queued.len());
    for notice in queued {
        println!(
            "  - {} for {} ({})",
            notice.template,
            notice.application_id.0,
            notice
                .details
                .get("sla")
                .map(String::as_str)
                .unwrap_or("no SLA")
        );
    }

    Ok(())
}

fn demo_scenarios() -> Vec<(&'static str, LoanApplication)> {
    vec![
        (
            "Approved: comfortable DTI",
            LoanApplication {
                monthly_income: 50_000.0,
                monthly_debt: 12_000.0,
                loan_amount: 100_000.0,
                employment: EmploymentStatus::FullTime,
                credit_tier: CreditTier::Good,
            },
        ),
        (
            "Needs review: DTI in the 36-43% band",
            LoanApplication {
                monthly_income: 40_000.0,
                monthly_debt: 16_000.0,
                loan_amount: 100_000.0,
                employment: EmploymentStatus::FullTime,
                credit_tier: CreditTier::Fair,
            },
        ),
        (
            "Declined: DTI above the maximum",
            LoanApplication {
                monthly_income: 35_000.0,
                monthly_debt: 22_000.0,
                loan_amount: 100_000.0,
                employment: EmploymentStatus::FullTime,
                credit_tier: CreditTier::Good,
            },
        ),
        (
            "Declined: request above the 5x annual income ceiling",
            LoanApplication {
                monthly_income: 50_000.0,
                monthly_debt: 5_000.0,
                loan_amount: 4_000_000.0,
                employment: EmploymentStatus::FullTime,
                credit_tier: CreditTier::Excellent,
            },
        ),
    ]
}
