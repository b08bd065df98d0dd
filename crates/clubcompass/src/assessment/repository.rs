use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AssessmentId, ClubRecommendation, ClubSummary, QuizResponses, ReasoningItem, UserId,
};

/// Stored per-club recommendation row. The slug stands alone so a result can
/// still be rendered after the club leaves the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub club_slug: String,
    pub score: i32,
    pub rank: u32,
    pub reasoning: Vec<ReasoningItem>,
}

impl From<&ClubRecommendation> for RecommendationRecord {
    fn from(recommendation: &ClubRecommendation) -> Self {
        Self {
            club_slug: recommendation.club.slug.clone(),
            score: recommendation.score,
            rank: recommendation.rank,
            reasoning: recommendation.reasoning.clone(),
        }
    }
}

/// Repository record holding the quiz responses and the ranked rows they
/// produced. Rows ride inside the record, so a single insert persists both
/// and no partially written assessment can be observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_id: Option<UserId>,
    pub responses: QuizResponses,
    pub created_at: DateTime<Utc>,
    pub recommendations: Vec<RecommendationRecord>,
}

impl AssessmentRecord {
    /// Listing entry for history endpoints; recommendation rows stay out of
    /// the listing payload.
    pub fn history_view(&self) -> AssessmentHistoryView {
        AssessmentHistoryView {
            id: self.id,
            user_id: self.user_id,
            responses: self.responses,
            created_at: self.created_at,
        }
    }
}

/// Sanitized entry describing one past assessment of a user.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentHistoryView {
    pub id: AssessmentId,
    pub user_id: Option<UserId>,
    pub responses: QuizResponses,
    pub created_at: DateTime<Utc>,
}

/// Storage abstraction so assessment flows can run against in-memory
/// implementations in tests.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Records owned by the user, newest first, at most `limit` entries.
    fn for_user(&self, user: &UserId, limit: usize)
        -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the club roster backing recommendations.
pub trait ClubDirectory: Send + Sync {
    /// Clubs eligible for new recommendations.
    fn active_clubs(&self) -> Result<Vec<ClubSummary>, DirectoryError>;
    /// Looks a club up regardless of its active flag, so stored results keep
    /// rendering clubs that were deactivated after scoring.
    fn find_by_slug(&self, slug: &str) -> Result<Option<ClubSummary>, DirectoryError>;
}

/// Club directory lookup failure.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("club directory unavailable: {0}")]
    Unavailable(String),
}
