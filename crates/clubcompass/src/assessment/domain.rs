use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a stored assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a path-supplied identifier. Malformed input reads as an
    /// unknown assessment, not a request error.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier for the account that owns an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The five quiz slots, in the order students see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Enjoy,
    Time,
    Domain,
    Impact,
    Past,
}

impl Question {
    pub const fn prompt(self) -> &'static str {
        match self {
            Question::Enjoy => "What do you enjoy most?",
            Question::Time => "How much time can you commit?",
            Question::Domain => "Which domain are you most drawn to?",
            Question::Impact => "What kind of impact do you want to create?",
            Question::Past => "Past experience?",
        }
    }
}

/// Answer set for the enjoyment question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EnjoyAnswer {
    Coding,
    Designing,
    Organizing,
    PublicSpeaking,
    Creative,
}

impl EnjoyAnswer {
    pub const ALL: [EnjoyAnswer; 5] = [
        EnjoyAnswer::Coding,
        EnjoyAnswer::Designing,
        EnjoyAnswer::Organizing,
        EnjoyAnswer::PublicSpeaking,
        EnjoyAnswer::Creative,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EnjoyAnswer::Coding => "Coding / problem solving",
            EnjoyAnswer::Designing => "Designing and building things",
            EnjoyAnswer::Organizing => "Organizing events",
            EnjoyAnswer::PublicSpeaking => "Public speaking",
            EnjoyAnswer::Creative => "Creative arts",
        }
    }
}

impl FromStr for EnjoyAnswer {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "coding" => Ok(EnjoyAnswer::Coding),
            "designing" => Ok(EnjoyAnswer::Designing),
            "organizing" => Ok(EnjoyAnswer::Organizing),
            "public_speaking" => Ok(EnjoyAnswer::PublicSpeaking),
            "creative" => Ok(EnjoyAnswer::Creative),
            other => Err(format!("unknown enjoy answer '{other}'")),
        }
    }
}

/// Weekly time commitment. Collected with the quiz but never scored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeCommitment {
    Low,
    Medium,
    High,
}

impl FromStr for TimeCommitment {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(TimeCommitment::Low),
            "medium" => Ok(TimeCommitment::Medium),
            "high" => Ok(TimeCommitment::High),
            other => Err(format!("unknown time commitment '{other}'")),
        }
    }
}

/// Answer set for the domain question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DomainAnswer {
    Ai,
    Robotics,
    Web,
    Electronics,
    Management,
}

impl DomainAnswer {
    pub const ALL: [DomainAnswer; 5] = [
        DomainAnswer::Ai,
        DomainAnswer::Robotics,
        DomainAnswer::Web,
        DomainAnswer::Electronics,
        DomainAnswer::Management,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DomainAnswer::Ai => "Artificial Intelligence / Data Science",
            DomainAnswer::Robotics => "Robotics / IoT",
            DomainAnswer::Web => "Web / Mobile Development",
            DomainAnswer::Electronics => "Electronics / Hardware",
            DomainAnswer::Management => "Management / Entrepreneurship",
        }
    }
}

impl FromStr for DomainAnswer {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ai" => Ok(DomainAnswer::Ai),
            "robotics" => Ok(DomainAnswer::Robotics),
            "web" => Ok(DomainAnswer::Web),
            "electronics" => Ok(DomainAnswer::Electronics),
            "management" => Ok(DomainAnswer::Management),
            other => Err(format!("unknown domain answer '{other}'")),
        }
    }
}

/// Answer set for the impact question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ImpactAnswer {
    Tech,
    Social,
    Cultural,
    Entrepreneurship,
}

impl ImpactAnswer {
    pub const ALL: [ImpactAnswer; 4] = [
        ImpactAnswer::Tech,
        ImpactAnswer::Social,
        ImpactAnswer::Cultural,
        ImpactAnswer::Entrepreneurship,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ImpactAnswer::Tech => "Technological innovation",
            ImpactAnswer::Social => "Social change",
            ImpactAnswer::Cultural => "Cultural enrichment",
            ImpactAnswer::Entrepreneurship => "Entrepreneurship / Business",
        }
    }
}

impl FromStr for ImpactAnswer {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "tech" => Ok(ImpactAnswer::Tech),
            "social" => Ok(ImpactAnswer::Social),
            "cultural" => Ok(ImpactAnswer::Cultural),
            "entrepreneurship" => Ok(ImpactAnswer::Entrepreneurship),
            other => Err(format!("unknown impact answer '{other}'")),
        }
    }
}

/// Answer set for the past-experience question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PastAnswer {
    Coding,
    Technical,
    Cultural,
    Sports,
    None,
}

impl PastAnswer {
    pub const ALL: [PastAnswer; 5] = [
        PastAnswer::Coding,
        PastAnswer::Technical,
        PastAnswer::Cultural,
        PastAnswer::Sports,
        PastAnswer::None,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PastAnswer::Coding => "Coding competitions",
            PastAnswer::Technical => "Technical projects",
            PastAnswer::Cultural => "Cultural events",
            PastAnswer::Sports => "Sports events",
            PastAnswer::None => "None, first time!",
        }
    }
}

impl FromStr for PastAnswer {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "coding" => Ok(PastAnswer::Coding),
            "technical" => Ok(PastAnswer::Technical),
            "cultural" => Ok(PastAnswer::Cultural),
            "sports" => Ok(PastAnswer::Sports),
            "none" => Ok(PastAnswer::None),
            other => Err(format!("unknown past experience answer '{other}'")),
        }
    }
}

/// One completed quiz. Every question carries exactly one answer token and
/// serde rejects tokens outside the declared sets at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponses {
    pub enjoy: EnjoyAnswer,
    pub time: TimeCommitment,
    pub domain: DomainAnswer,
    pub impact: ImpactAnswer,
    pub past: PastAnswer,
}

/// One positive contribution to a club's score, phrased for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningItem {
    pub question: String,
    pub answer: String,
    pub contribution: i32,
}

/// Club details embedded in a recommendation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubSummary {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub logo_url: String,
}

impl ClubSummary {
    /// Degraded stand-in for a club that has left the directory since its
    /// recommendation rows were written.
    pub fn placeholder(slug: &str) -> Self {
        Self {
            id: slug.to_string(),
            slug: slug.to_string(),
            name: humanize_slug(slug),
            tagline: "Club information unavailable".to_string(),
            logo_url: String::new(),
        }
    }
}

fn humanize_slug(slug: &str) -> String {
    slug.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// One ranked entry in an assessment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubRecommendation {
    pub club: ClubSummary,
    pub score: i32,
    pub rank: u32,
    pub reasoning: Vec<ReasoningItem>,
}
