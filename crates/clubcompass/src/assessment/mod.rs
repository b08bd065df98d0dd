//! Quiz assessment intake, scoring, and result reconstruction.
//!
//! A submitted quiz is scored against the club directory's active roster,
//! the ranked outcome is persisted as a single record with its rows
//! embedded, and later lookups rebuild the payload against whatever the
//! directory holds today.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentId, ClubRecommendation, ClubSummary, DomainAnswer, EnjoyAnswer, ImpactAnswer,
    PastAnswer, Question, QuizResponses, ReasoningItem, TimeCommitment, UserId,
};
pub use repository::{
    AssessmentHistoryView, AssessmentRecord, AssessmentRepository, ClubDirectory, DirectoryError,
    RecommendationRecord, RepositoryError,
};
pub use router::{assessment_router, SubmitAssessmentRequest};
pub use scoring::{
    ClubRules, RecommendationEngine, ScoringTable, DEFAULT_RECOMMENDATION_LIMIT,
};
pub use service::{
    AssessmentResult, AssessmentService, AssessmentServiceError, DEFAULT_HISTORY_LIMIT,
};
