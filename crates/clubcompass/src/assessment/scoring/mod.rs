mod table;

pub use table::{ClubRules, ScoringTable};

use super::domain::{ClubRecommendation, ClubSummary, Question, QuizResponses, ReasoningItem};

/// Number of ranked clubs returned when the caller does not override it.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Stateless scorer applying an injected weight table to quiz responses.
///
/// The engine only reads the table, so one instance can serve every request
/// behind an `Arc`.
pub struct RecommendationEngine {
    table: ScoringTable,
}

impl RecommendationEngine {
    pub fn new(table: ScoringTable) -> Self {
        Self { table }
    }

    /// Scores a single club. Clubs missing from the table score zero with no
    /// reasoning. Time commitment never contributes; reasoning keeps only
    /// answers that pulled the score up, while zero and negative weights
    /// still land in the total.
    pub fn score_club(&self, slug: &str, responses: &QuizResponses) -> (i32, Vec<ReasoningItem>) {
        let Some(rules) = self.table.rules_for(slug) else {
            return (0, Vec::new());
        };

        let mut total = 0;
        let mut reasoning = Vec::new();

        let contribution = rules.enjoy_weight(responses.enjoy);
        total += contribution;
        if contribution > 0 {
            reasoning.push(ReasoningItem {
                question: Question::Enjoy.prompt().to_string(),
                answer: responses.enjoy.label().to_string(),
                contribution,
            });
        }

        let contribution = rules.domain_weight(responses.domain);
        total += contribution;
        if contribution > 0 {
            reasoning.push(ReasoningItem {
                question: Question::Domain.prompt().to_string(),
                answer: responses.domain.label().to_string(),
                contribution,
            });
        }

        let contribution = rules.impact_weight(responses.impact);
        total += contribution;
        if contribution > 0 {
            reasoning.push(ReasoningItem {
                question: Question::Impact.prompt().to_string(),
                answer: responses.impact.label().to_string(),
                contribution,
            });
        }

        let contribution = rules.past_weight(responses.past);
        total += contribution;
        if contribution > 0 {
            reasoning.push(ReasoningItem {
                question: Question::Past.prompt().to_string(),
                answer: responses.past.label().to_string(),
                contribution,
            });
        }

        (total, reasoning)
    }

    /// Ranks every covered roster club for the given responses, highest
    /// score first. Ties order by slug so equal scores always render the
    /// same way, and ranks run 1..=n over the returned page.
    pub fn recommend(
        &self,
        responses: &QuizResponses,
        roster: &[ClubSummary],
        top_n: usize,
    ) -> Vec<ClubRecommendation> {
        let mut scored: Vec<(i32, Vec<ReasoningItem>, &ClubSummary)> = roster
            .iter()
            .filter(|club| self.table.covers(&club.slug))
            .map(|club| {
                let (score, reasoning) = self.score_club(&club.slug, responses);
                (score, reasoning, club)
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.2.slug.cmp(&b.2.slug)));
        scored.truncate(top_n);

        scored
            .into_iter()
            .enumerate()
            .map(|(index, (score, reasoning, club))| ClubRecommendation {
                club: club.clone(),
                score,
                rank: index as u32 + 1,
                reasoning,
            })
            .collect()
    }
}
