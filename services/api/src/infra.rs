use clubcompass::assessment::{
    AssessmentId, AssessmentRecord, AssessmentRepository, ClubDirectory, ClubSummary,
    DirectoryError, RepositoryError, UserId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) directory: Arc<InMemoryClubDirectory>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
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

/// Slug-keyed club roster held in memory. Slug order doubles as the roster's
/// enumeration order, so recommendation tie-breaks stay reproducible.
#[derive(Default, Clone)]
pub(crate) struct InMemoryClubDirectory {
    clubs: Arc<Mutex<BTreeMap<String, ClubEntry>>>,
}

#[derive(Clone)]
struct ClubEntry {
    summary: ClubSummary,
    active: bool,
}

impl InMemoryClubDirectory {
    pub(crate) fn with_clubs(clubs: Vec<ClubSummary>) -> Self {
        let map = clubs
            .into_iter()
            .map(|summary| {
                (
                    summary.slug.clone(),
                    ClubEntry {
                        summary,
                        active: true,
                    },
                )
            })
            .collect();
        Self {
            clubs: Arc::new(Mutex::new(map)),
        }
    }

    /// Directory preloaded with the campus roster the builtin scoring table
    /// knows about, plus a couple of clubs the table does not cover.
    pub(crate) fn seeded() -> Self {
        let directory = Self::with_clubs(seed_roster());
        // Dormant club: still resolvable by slug, never recommended.
        directory.deactivate("quantum-circle");
        directory
    }

    pub(crate) fn deactivate(&self, slug: &str) {
        let mut guard = self.clubs.lock().expect("directory mutex poisoned");
        if let Some(entry) = guard.get_mut(slug) {
            entry.active = false;
        }
    }

    pub(crate) fn remove(&self, slug: &str) {
        self.clubs
            .lock()
            .expect("directory mutex poisoned")
            .remove(slug);
    }
}

impl ClubDirectory for InMemoryClubDirectory {
    fn active_clubs(&self) -> Result<Vec<ClubSummary>, DirectoryError> {
        let guard = self.clubs.lock().expect("directory mutex poisoned");
        Ok(guard
            .values()
            .filter(|entry| entry.active)
            .map(|entry| entry.summary.clone())
            .collect())
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<ClubSummary>, DirectoryError> {
        let guard = self.clubs.lock().expect("directory mutex poisoned");
        Ok(guard.get(slug).map(|entry| entry.summary.clone()))
    }
}

fn club(slug: &str, name: &str, tagline: &str) -> ClubSummary {
    // v5 over the slug keeps club ids stable across restarts.
    let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, slug.as_bytes());
    ClubSummary {
        id: id.to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        logo_url: format!("/images/clubs/{slug}.jpg"),
    }
}

pub(crate) fn seed_roster() -> Vec<ClubSummary> {
    vec![
        club("acm", "ACM Student Chapter", "Algorithms, contests, and developer culture"),
        club("aero", "Aero Club", "Design, build, and fly fixed-wing aircraft"),
        club("aquila", "Team Aquila", "Autonomous drones and aerial systems"),
        club("augmentai", "AugmentAI", "Applied machine learning projects and papers"),
        club("bullz", "Team Bullz", "Off-road vehicle design and racing"),
        club("business-insights", "Business Insights", "Case studies, markets, and strategy"),
        club("chess-circle", "Chess Circle", "Casual and rated chess evenings"),
        club("chiranthana", "Chiranthana", "Kannada literary and cultural forum"),
        club("ciie", "CIIE", "Incubation cell for student startups"),
        club("codeio", "CodeIO", "The CSE department's coding collective"),
        club("corrtechs", "CorrTechs", "Medical devices and assistive technology"),
        club("danzaddix", "DanzAddix", "Western dance crew"),
        club("dsync", "DSync", "Data science study group and hackathons"),
        club("edc", "Entrepreneurship Development Cell", "From idea to pitch to company"),
        club("eeea", "EEEA", "Electrical and electronics engineering association"),
        club("elsoc", "Electronics Society", "PCBs, embedded systems, and hardware jams"),
        club("falcons", "Falcons", "Stagecraft, design, and campus productions"),
        club("finearts", "Fine Arts Club", "Painting, sketching, and installations"),
        club("gdscl", "Google Developer Student Club", "Workshops and community builds"),
        club("gradient", "Gradient", "Deep learning reading circle"),
        club("groovehouse", "GrooveHouse", "Street and freestyle dance"),
        club("ieee-cs", "IEEE Computer Society", "Systems, software, and student research"),
        club("ieee-pes", "IEEE Power & Energy Society", "Power systems and green energy"),
        club("ieee-sb", "IEEE Student Branch", "The umbrella IEEE student body"),
        club("ieee-sps", "IEEE Signal Processing Society", "DSP, imaging, and audio"),
        club("ieee-wie", "IEEE Women in Engineering", "Mentorship and outreach"),
        club("iic", "Institution's Innovation Council", "Innovation drives and grants"),
        club("inksanity", "Inksanity", "Writing, debate, and the campus zine"),
        club("iseclub", "ISE Club", "Information science student association"),
        club("leosatva", "Leo Club Satva", "Youth service under Lions International"),
        club("mea", "Mechanical Engineers Association", "Machines, CAD, and fabrication"),
        club("mountaineering", "Mountaineering Club", "Treks, climbs, and expeditions"),
        club("munsoc", "Model United Nations Society", "Diplomacy and debate"),
        club("ninaad", "Ninaad", "The campus music ensemble"),
        club("nss", "National Service Scheme", "Community service and social outreach"),
        club("panache", "Panache", "Fashion and runway team"),
        club("paramvah", "Paramvah", "Classical and folk dance troupe"),
        club("pentagram", "Pentagram", "Mathematics circle and puzzle nights"),
        club("pravrutthi", "Pravrutthi", "Theatre and street play troupe"),
        club("protocol", "Protocol", "Networking and infrastructure guild"),
        club("quantum-circle", "Quantum Circle", "Quantum computing study sessions"),
        club("respawn", "Respawn", "Esports and game nights"),
        club("robotics", "Robotics Club", "Bots, manipulators, and ROS"),
        club("rocketry", "Rocketry Club", "Model rockets and propulsion research"),
        club("rotaract", "Rotaract Club", "Service projects and professional development"),
        club("samskruthi", "Samskruthi", "Traditional arts and festival celebrations"),
        club("synapse", "Synapse", "Interdisciplinary science forum"),
        club("teamcodelocked", "Team CodeLocked", "Competitive programming squad"),
        club("upagraha", "Upagraha", "Student satellite program"),
        club("varaince", "VarAInce", "Statistics and ML competition team"),
    ]
}
