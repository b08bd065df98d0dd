use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, ClubRecommendation, ClubSummary, QuizResponses, UserId};
use super::repository::{
    AssessmentHistoryView, AssessmentRecord, AssessmentRepository, ClubDirectory, DirectoryError,
    RecommendationRecord, RepositoryError,
};
use super::scoring::{RecommendationEngine, DEFAULT_RECOMMENDATION_LIMIT};

/// Most past assessments a history listing returns.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Full assessment payload returned on submission and on later lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub assessment_id: AssessmentId,
    pub recommendations: Vec<ClubRecommendation>,
    pub created_at: DateTime<Utc>,
}

/// Service composing the scoring engine, the assessment repository, and the
/// club directory.
pub struct AssessmentService<R, D> {
    repository: Arc<R>,
    directory: Arc<D>,
    engine: Arc<RecommendationEngine>,
    limit: usize,
}

impl<R, D> AssessmentService<R, D>
where
    R: AssessmentRepository + 'static,
    D: ClubDirectory + 'static,
{
    pub fn new(repository: Arc<R>, directory: Arc<D>, engine: Arc<RecommendationEngine>) -> Self {
        Self::with_limit(repository, directory, engine, DEFAULT_RECOMMENDATION_LIMIT)
    }

    pub fn with_limit(
        repository: Arc<R>,
        directory: Arc<D>,
        engine: Arc<RecommendationEngine>,
        limit: usize,
    ) -> Self {
        Self {
            repository,
            directory,
            engine,
            limit,
        }
    }

    /// Scores the quiz against the active roster and persists the outcome as
    /// one record. An assessment that matched no scorable club still stores,
    /// with an empty recommendation list.
    pub fn submit(
        &self,
        responses: QuizResponses,
        user_id: Option<UserId>,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        let roster = self.directory.active_clubs()?;
        let recommendations = self.engine.recommend(&responses, &roster, self.limit);

        let record = AssessmentRecord {
            id: AssessmentId::generate(),
            user_id,
            responses,
            created_at: Utc::now(),
            recommendations: recommendations
                .iter()
                .map(RecommendationRecord::from)
                .collect(),
        };
        let stored = self.repository.insert(record)?;

        Ok(AssessmentResult {
            assessment_id: stored.id,
            recommendations,
            created_at: stored.created_at,
        })
    }

    /// Rebuilds a stored assessment, resolving each row against the current
    /// directory. A vanished club renders as a placeholder rather than
    /// dropping its row; a missing record is `NotFound`, never an empty
    /// result.
    pub fn result(&self, id: &AssessmentId) -> Result<AssessmentResult, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let mut rows = record.recommendations;
        rows.sort_by_key(|row| row.rank);

        let mut recommendations = Vec::with_capacity(rows.len());
        for row in rows {
            let club = match self.directory.find_by_slug(&row.club_slug)? {
                Some(club) => club,
                None => ClubSummary::placeholder(&row.club_slug),
            };
            recommendations.push(ClubRecommendation {
                club,
                score: row.score,
                rank: row.rank,
                reasoning: row.reasoning,
            });
        }

        Ok(AssessmentResult {
            assessment_id: record.id,
            recommendations,
            created_at: record.created_at,
        })
    }

    /// Past assessments for one user, newest first.
    pub fn history(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<AssessmentHistoryView>, AssessmentServiceError> {
        let records = self.repository.for_user(user, limit)?;
        Ok(records.iter().map(AssessmentRecord::history_view).collect())
    }
}

/// Error raised by assessment service operations.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
