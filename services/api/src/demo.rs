use crate::infra::InMemoryAssessmentRepository;
use clap::Args;
use std::sync::Arc;

use maturity_ai::assessment::{
    reference_products, reference_use_cases, Answer, AssessmentCatalog, AssessmentService,
    AssessmentSubmission, CompanyInfo, CompanySize, IndustryId, MaturityLevel, UseCaseStrategy,
};
use maturity_ai::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Industry identifier from the catalog (e.g. banking-finance, retail)
    #[arg(long, default_value = "banking-finance")]
    pub(crate) industry: String,
    /// Company size bucket: micro, small, medium, large, enterprise
    #[arg(long, default_value = "medium", value_parser = parse_company_size)]
    pub(crate) company_size: CompanySize,
    /// Self-assessed maturity: resister, explorer, player, transformer, disrupter
    #[arg(long, default_value = "explorer", value_parser = parse_maturity_level)]
    pub(crate) self_assessment: MaturityLevel,
    /// Target questionnaire total, clamped to the reachable score range
    #[arg(long, default_value_t = 38)]
    pub(crate) score: u32,
}

fn parse_company_size(raw: &str) -> Result<CompanySize, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "micro" => Ok(CompanySize::Micro),
        "small" => Ok(CompanySize::Small),
        "medium" => Ok(CompanySize::Medium),
        "large" => Ok(CompanySize::Large),
        "enterprise" => Ok(CompanySize::Enterprise),
        other => Err(format!("unknown company size '{other}'")),
    }
}

fn parse_maturity_level(raw: &str) -> Result<MaturityLevel, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "resister" => Ok(MaturityLevel::Resister),
        "explorer" => Ok(MaturityLevel::Explorer),
        "player" => Ok(MaturityLevel::Player),
        "transformer" => Ok(MaturityLevel::Transformer),
        "disrupter" => Ok(MaturityLevel::Disrupter),
        other => Err(format!("unknown maturity level '{other}'")),
    }
}

/// Answers summing to `total`, bumping questions in order from the
/// all-minimum baseline.
fn answers_for_total(catalog: &AssessmentCatalog, total: u32) -> Vec<Answer> {
    let questions = catalog.questions().len() as u32;
    let span = (catalog.max_answer_score() - catalog.min_answer_score()) as u32;
    let total = total.clamp(questions, questions * catalog.max_answer_score() as u32);

    let mut extra = total - questions;
    catalog
        .questions()
        .iter()
        .map(|question| {
            let bump = extra.min(span);
            extra -= bump;
            Answer {
                question_id: question.id,
                score: catalog.min_answer_score() + bump as u8,
            }
        })
        .collect()
}

/// Offline walkthrough of the full pipeline: scoring, product matching,
/// the static use-case shortlist, and the composed package with its
/// deterministic narrative fallback.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        industry,
        company_size,
        self_assessment,
        score,
    } = args;

    let catalog = Arc::new(AssessmentCatalog::reference());
    let service = AssessmentService::new(
        Arc::clone(&catalog),
        Arc::new(reference_products()),
        Arc::new(reference_use_cases()),
        Arc::new(InMemoryAssessmentRepository::default()),
        None,
    );

    let submission = AssessmentSubmission {
        self_assessment,
        answers: answers_for_total(&catalog, score),
        company_info: CompanyInfo {
            industry: IndustryId::new(industry),
            company_size,
        },
        email: None,
        completion_seconds: None,
    };

    let result = service.submit(submission)?;

    println!("AI maturity assessment demo");
    println!(
        "Company: {} | {}",
        catalog
            .industry_label(&result.company_info.industry)
            .unwrap_or("Allgemein"),
        result.company_info.company_size
    );
    println!(
        "Score: {}/{} -> {}",
        result.score,
        catalog.max_possible_score(),
        result.calculated_level
    );
    println!(
        "Self-assessed {} (delta {})",
        result.self_assessment, result.delta
    );
    println!("\n{}", result.insight);
    println!("\nNext steps: {}", result.next_steps);

    let products = service.product_recommendations(&result);
    println!("\nRecommended offerings");
    if products.is_empty() {
        println!("- none matched the current profile");
    }
    for product in &products {
        println!("- {}: {}", product.name, product.description);
    }

    let (recommendations, _) = service
        .use_case_recommendations(UseCaseStrategy::Static, &result)
        .await;
    println!("\nUse case shortlist");
    if recommendations.is_empty() {
        println!("- no catalog entries for this profile");
    }
    for rec in &recommendations {
        println!(
            "- {} (feasibility {}, priority {})",
            rec.use_case.title, rec.feasibility_score, rec.priority_score
        );
        println!("  {}", rec.reasoning);
    }

    let composed = service.compose(&result).await;
    println!(
        "\nNarrative recommendation{}",
        if composed.degraded {
            " (offline fallback)"
        } else {
            ""
        }
    );
    println!("{}", composed.narrative);

    Ok(())
}
