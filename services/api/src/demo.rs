use crate::infra::{InMemoryAssessmentRepository, InMemoryClubDirectory};
use chrono::Local;
use clap::Args;
use clubcompass::assessment::{
    AssessmentResult, AssessmentService, DomainAnswer, EnjoyAnswer, ImpactAnswer, PastAnswer,
    QuizResponses, RecommendationEngine, ScoringTable, TimeCommitment, UserId,
    DEFAULT_RECOMMENDATION_LIMIT,
};
use clubcompass::error::AppError;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// What do you enjoy most? (coding, designing, organizing, public_speaking, creative)
    #[arg(long, value_parser = EnjoyAnswer::from_str)]
    pub(crate) enjoy: EnjoyAnswer,
    /// Weekly time commitment (low, medium, high)
    #[arg(long, value_parser = TimeCommitment::from_str)]
    pub(crate) time: TimeCommitment,
    /// Preferred domain (ai, robotics, web, electronics, management)
    #[arg(long, value_parser = DomainAnswer::from_str)]
    pub(crate) domain: DomainAnswer,
    /// Desired impact (tech, social, cultural, entrepreneurship)
    #[arg(long, value_parser = ImpactAnswer::from_str)]
    pub(crate) impact: ImpactAnswer,
    /// Past experience (coding, technical, cultural, sports, none)
    #[arg(long, value_parser = PastAnswer::from_str)]
    pub(crate) past: PastAnswer,
    /// Attribute the assessment to a user id (UUID)
    #[arg(long, value_parser = parse_user_id)]
    pub(crate) user_id: Option<UserId>,
    /// Number of ranked clubs to return
    #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
    pub(crate) top: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of ranked clubs each submission returns
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

fn parse_user_id(raw: &str) -> Result<UserId, String> {
    UserId::parse(raw).ok_or_else(|| format!("failed to parse '{raw}' as a UUID"))
}

fn build_service(
    top: usize,
) -> (
    Arc<AssessmentService<InMemoryAssessmentRepository, InMemoryClubDirectory>>,
    Arc<InMemoryClubDirectory>,
) {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let directory = Arc::new(InMemoryClubDirectory::seeded());
    let engine = Arc::new(RecommendationEngine::new(ScoringTable::builtin()));
    let service = Arc::new(AssessmentService::with_limit(
        repository,
        directory.clone(),
        engine,
        top,
    ));
    (service, directory)
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        enjoy,
        time,
        domain,
        impact,
        past,
        user_id,
        top,
    } = args;

    let responses = QuizResponses {
        enjoy,
        time,
        domain,
        impact,
        past,
    };

    let (service, _directory) = build_service(top);
    match service.submit(responses, user_id) {
        Ok(result) => render_assessment(&result),
        Err(err) => println!("Submission failed: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let top = args.top.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
    let (service, directory) = build_service(top);

    println!("ClubCompass demo");

    let demo_user = UserId(Uuid::new_v5(&Uuid::NAMESPACE_URL, b"demo-student"));
    let coding_profile = QuizResponses {
        enjoy: EnjoyAnswer::Coding,
        time: TimeCommitment::High,
        domain: DomainAnswer::Ai,
        impact: ImpactAnswer::Tech,
        past: PastAnswer::Coding,
    };

    println!("\nSubmission 1: coding profile (owned by demo user)");
    let first = match service.submit(coding_profile, Some(demo_user)) {
        Ok(result) => result,
        Err(err) => {
            println!("  Submission failed: {err}");
            return Ok(());
        }
    };
    render_assessment(&first);

    let cultural_profile = QuizResponses {
        enjoy: EnjoyAnswer::Creative,
        time: TimeCommitment::Low,
        domain: DomainAnswer::Management,
        impact: ImpactAnswer::Cultural,
        past: PastAnswer::Cultural,
    };

    println!("\nSubmission 2: cultural profile (anonymous)");
    match service.submit(cultural_profile, None) {
        Ok(result) => render_assessment(&result),
        Err(err) => println!("  Submission failed: {err}"),
    }

    // Roster drift: the top club leaves the directory, the stored result
    // must still render every row.
    if let Some(leader) = first.recommendations.first() {
        println!(
            "\nRoster drift: removing '{}' from the directory",
            leader.club.slug
        );
        directory.remove(&leader.club.slug);

        match service.result(&first.assessment_id) {
            Ok(result) => render_assessment(&result),
            Err(err) => println!("  Lookup failed: {err}"),
        }
    }

    println!("\nAssessment history for the demo user");
    match service.history(&demo_user, top) {
        Ok(views) if views.is_empty() => println!("- no stored assessments"),
        Ok(views) => {
            for view in views {
                println!(
                    "- {} taken {}",
                    view.id,
                    view.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
                );
            }
        }
        Err(err) => println!("- history unavailable: {err}"),
    }

    Ok(())
}

fn render_assessment(result: &AssessmentResult) {
    println!(
        "Assessment {} (created {})",
        result.assessment_id,
        result
            .created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );

    if result.recommendations.is_empty() {
        println!("  No clubs matched this quiz.");
        return;
    }

    for recommendation in &result.recommendations {
        println!(
            "  {}. {} [{}] score {}",
            recommendation.rank,
            recommendation.club.name,
            recommendation.club.slug,
            recommendation.score
        );
        if !recommendation.club.tagline.is_empty() {
            println!("     {}", recommendation.club.tagline);
        }
        for reason in &recommendation.reasoning {
            println!(
                "     +{} {} -> {}",
                reason.contribution, reason.question, reason.answer
            );
        }
    }
}
