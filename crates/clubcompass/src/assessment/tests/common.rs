use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    AssessmentId, ClubSummary, DomainAnswer, EnjoyAnswer, ImpactAnswer, PastAnswer, QuizResponses,
    TimeCommitment, UserId,
};
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, ClubDirectory, DirectoryError, RepositoryError,
};
use crate::assessment::scoring::{ClubRules, ScoringTable};
use crate::assessment::{assessment_router, AssessmentService, RecommendationEngine};

pub(super) fn sample_responses() -> QuizResponses {
    QuizResponses {
        enjoy: EnjoyAnswer::Coding,
        time: TimeCommitment::High,
        domain: DomainAnswer::Ai,
        impact: ImpactAnswer::Tech,
        past: PastAnswer::Coding,
    }
}

pub(super) fn cultural_responses() -> QuizResponses {
    QuizResponses {
        enjoy: EnjoyAnswer::Creative,
        time: TimeCommitment::Low,
        domain: DomainAnswer::Management,
        impact: ImpactAnswer::Cultural,
        past: PastAnswer::Cultural,
    }
}

pub(super) fn club(slug: &str, name: &str) -> ClubSummary {
    ClubSummary {
        id: format!("club-{slug}"),
        slug: slug.to_string(),
        name: name.to_string(),
        tagline: format!("{name} tagline"),
        logo_url: format!("/images/clubs/{slug}.jpg"),
    }
}

pub(super) fn campus_roster() -> Vec<ClubSummary> {
    vec![
        club("acm", "ACM Student Chapter"),
        club("augmentai", "AugmentAI"),
        club("codeio", "CodeIO"),
        club("edc", "Entrepreneurship Development Cell"),
        club("finearts", "Fine Arts Club"),
        club("gdscl", "Google Developer Student Club"),
        club("ieee-cs", "IEEE Computer Society"),
        club("munsoc", "Model United Nations Society"),
        club("ninaad", "Ninaad"),
        club("nss", "National Service Scheme"),
        club("robotics", "Robotics Club"),
        club("rotaract", "Rotaract Club"),
        club("teamcodelocked", "Team CodeLocked"),
        // Present in the directory but absent from the scoring table.
        club("chess-circle", "Chess Circle"),
    ]
}

/// One club carrying the worked-example weights for the sample responses:
/// enjoy coding 4, domain ai 3, impact tech 4, past coding 3.
pub(super) fn single_club_table() -> ScoringTable {
    let mut rules = BTreeMap::new();
    rules.insert(
        "circuitry".to_string(),
        ClubRules::new(
            BTreeMap::from([(EnjoyAnswer::Coding, 4), (EnjoyAnswer::Designing, 2)]),
            BTreeMap::from([(DomainAnswer::Ai, 3), (DomainAnswer::Electronics, 2)]),
            BTreeMap::from([(ImpactAnswer::Tech, 4)]),
            BTreeMap::from([(PastAnswer::Coding, 3), (PastAnswer::None, 1)]),
        ),
    );
    ScoringTable::new(rules)
}

/// A table holding a negative weight, to pin down how penalties affect the
/// total without surfacing in reasoning.
pub(super) fn penalty_table() -> ScoringTable {
    let mut rules = BTreeMap::new();
    rules.insert(
        "debate".to_string(),
        ClubRules::new(
            BTreeMap::from([(EnjoyAnswer::Coding, -2), (EnjoyAnswer::PublicSpeaking, 5)]),
            BTreeMap::from([(DomainAnswer::Ai, 3)]),
            BTreeMap::from([(ImpactAnswer::Tech, 0)]),
            BTreeMap::from([(PastAnswer::Coding, 0)]),
        ),
    );
    ScoringTable::new(rules)
}

pub(super) fn builtin_engine() -> Arc<RecommendationEngine> {
    Arc::new(RecommendationEngine::new(ScoringTable::builtin()))
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryDirectory>,
    Arc<MemoryRepository>,
    Arc<MemoryDirectory>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let directory = Arc::new(MemoryDirectory::with_clubs(campus_roster()));
    let service = AssessmentService::new(repository.clone(), directory.clone(), builtin_engine());
    (service, repository, directory)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_user(
        &self,
        user: &UserId,
        limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<AssessmentRecord> = guard
            .values()
            .filter(|record| record.user_id.as_ref() == Some(user))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Clone)]
pub(super) struct MemoryDirectory {
    clubs: Arc<Mutex<BTreeMap<String, (ClubSummary, bool)>>>,
}

impl MemoryDirectory {
    pub(super) fn with_clubs(clubs: Vec<ClubSummary>) -> Self {
        let map = clubs
            .into_iter()
            .map(|club| (club.slug.clone(), (club, true)))
            .collect();
        Self {
            clubs: Arc::new(Mutex::new(map)),
        }
    }

    pub(super) fn remove(&self, slug: &str) {
        self.clubs
            .lock()
            .expect("directory mutex poisoned")
            .remove(slug);
    }

    pub(super) fn rename(&self, slug: &str, name: &str) {
        let mut guard = self.clubs.lock().expect("directory mutex poisoned");
        if let Some((club, _)) = guard.get_mut(slug) {
            club.name = name.to_string();
        }
    }

    pub(super) fn deactivate(&self, slug: &str) {
        let mut guard = self.clubs.lock().expect("directory mutex poisoned");
        if let Some(entry) = guard.get_mut(slug) {
            entry.1 = false;
        }
    }
}

impl ClubDirectory for MemoryDirectory {
    fn active_clubs(&self) -> Result<Vec<ClubSummary>, DirectoryError> {
        let guard = self.clubs.lock().expect("directory mutex poisoned");
        Ok(guard
            .values()
            .filter(|(_, active)| *active)
            .map(|(club, _)| club.clone())
            .collect())
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<ClubSummary>, DirectoryError> {
        let guard = self.clubs.lock().expect("directory mutex poisoned");
        Ok(guard.get(slug).map(|(club, _)| club.clone()))
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_user(
        &self,
        _user: &UserId,
        _limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn for_user(
        &self,
        _user: &UserId,
        _limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableDirectory;

impl ClubDirectory for UnavailableDirectory {
    fn active_clubs(&self) -> Result<Vec<ClubSummary>, DirectoryError> {
        Err(DirectoryError::Unavailable("directory offline".to_string()))
    }

    fn find_by_slug(&self, _slug: &str) -> Result<Option<ClubSummary>, DirectoryError> {
        Err(DirectoryError::Unavailable("directory offline".to_string()))
    }
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryRepository, MemoryDirectory>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
