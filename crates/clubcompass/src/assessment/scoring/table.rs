use std::collections::BTreeMap;

use super::super::domain::{DomainAnswer, EnjoyAnswer, ImpactAnswer, PastAnswer};

/// Per-question answer weights for a single club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubRules {
    enjoy: BTreeMap<EnjoyAnswer, i32>,
    domain: BTreeMap<DomainAnswer, i32>,
    impact: BTreeMap<ImpactAnswer, i32>,
    past: BTreeMap<PastAnswer, i32>,
}

impl ClubRules {
    pub fn new(
        enjoy: BTreeMap<EnjoyAnswer, i32>,
        domain: BTreeMap<DomainAnswer, i32>,
        impact: BTreeMap<ImpactAnswer, i32>,
        past: BTreeMap<PastAnswer, i32>,
    ) -> Self {
        Self {
            enjoy,
            domain,
            impact,
            past,
        }
    }

    /// Weight for an enjoyment answer. Absent answers weigh zero.
    pub fn enjoy_weight(&self, answer: EnjoyAnswer) -> i32 {
        self.enjoy.get(&answer).copied().unwrap_or(0)
    }

    pub fn domain_weight(&self, answer: DomainAnswer) -> i32 {
        self.domain.get(&answer).copied().unwrap_or(0)
    }

    pub fn impact_weight(&self, answer: ImpactAnswer) -> i32 {
        self.impact.get(&answer).copied().unwrap_or(0)
    }

    pub fn past_weight(&self, answer: PastAnswer) -> i32 {
        self.past.get(&answer).copied().unwrap_or(0)
    }
}

/// Immutable slug-to-rules map driving the recommendation engine.
#[derive(Debug, Clone, Default)]
pub struct ScoringTable {
    rules: BTreeMap<String, ClubRules>,
}

impl ScoringTable {
    pub fn new(rules: BTreeMap<String, ClubRules>) -> Self {
        Self { rules }
    }

    pub fn rules_for(&self, slug: &str) -> Option<&ClubRules> {
        self.rules.get(slug)
    }

    pub fn covers(&self, slug: &str) -> bool {
        self.rules.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Hand-tuned weights for the campus roster.
    ///
    /// Weights are positional over the declared answer order of each set:
    /// enjoy (coding, designing, organizing, public_speaking, creative),
    /// domain (ai, robotics, web, electronics, management), impact (tech,
    /// social, cultural, entrepreneurship), past (coding, technical,
    /// cultural, sports, none).
    pub fn builtin() -> Self {
        let entries = [
            // Coding and software clubs
            ("acm", club([4, 2, 1, 1, 2], [3, 2, 3, 1, 0], [4, 1, 0, 2], [3, 3, 0, 0, 1])),
            ("teamcodelocked", club([5, 2, 1, 1, 1], [2, 1, 3, 1, 0], [5, 0, 0, 1], [4, 3, 0, 0, 1])),
            ("gdscl", club([4, 3, 2, 2, 2], [3, 1, 4, 1, 1], [4, 2, 0, 2], [3, 3, 0, 0, 2])),
            // AI and data science
            ("augmentai", club([4, 2, 1, 1, 2], [5, 2, 2, 1, 1], [5, 1, 0, 2], [3, 4, 0, 0, 1])),
            ("varaince", club([4, 2, 1, 1, 1], [5, 1, 2, 1, 1], [5, 1, 0, 2], [3, 4, 0, 0, 1])),
            ("dsync", club([4, 1, 1, 1, 1], [5, 1, 3, 1, 1], [4, 1, 0, 2], [4, 3, 0, 0, 1])),
            ("gradient", club([4, 2, 1, 1, 1], [5, 2, 2, 1, 1], [5, 1, 0, 2], [3, 4, 0, 0, 1])),
            // Robotics and aerospace
            ("robotics", club([3, 4, 1, 0, 3], [3, 5, 1, 4, 0], [4, 1, 0, 2], [2, 4, 0, 0, 1])),
            ("aquila", club([2, 4, 1, 1, 3], [1, 5, 0, 3, 1], [4, 1, 0, 2], [1, 4, 0, 0, 1])),
            ("aero", club([2, 4, 1, 1, 3], [1, 5, 0, 3, 1], [4, 1, 0, 2], [1, 4, 0, 0, 1])),
            ("rocketry", club([2, 5, 1, 1, 3], [1, 4, 0, 3, 1], [5, 0, 0, 2], [1, 5, 0, 0, 1])),
            ("upagraha", club([3, 4, 1, 1, 2], [2, 5, 1, 4, 1], [5, 1, 0, 2], [2, 5, 0, 0, 1])),
            ("bullz", club([1, 5, 2, 1, 3], [0, 4, 0, 3, 2], [4, 1, 0, 3], [1, 5, 0, 2, 1])),
            // IEEE societies
            ("ieee-sb", club([3, 2, 1, 1, 1], [2, 3, 2, 4, 0], [4, 1, 0, 2], [2, 4, 0, 0, 1])),
            ("ieee-cs", club([4, 2, 1, 1, 1], [3, 2, 4, 2, 0], [5, 1, 0, 1], [4, 3, 0, 0, 1])),
            ("ieee-wie", club([3, 2, 2, 2, 1], [2, 2, 2, 3, 2], [3, 3, 1, 2], [2, 3, 1, 0, 2])),
            ("ieee-pes", club([2, 3, 1, 1, 1], [1, 2, 1, 5, 1], [4, 2, 0, 1], [1, 4, 0, 0, 1])),
            ("ieee-sps", club([3, 2, 1, 1, 1], [3, 1, 1, 4, 0], [4, 1, 0, 1], [2, 4, 0, 0, 1])),
            // Electronics and core engineering
            ("elsoc", club([2, 4, 1, 1, 2], [2, 3, 1, 5, 0], [4, 1, 0, 1], [2, 4, 0, 0, 1])),
            ("eeea", club([2, 3, 1, 1, 1], [1, 2, 1, 5, 1], [4, 1, 0, 1], [1, 4, 0, 0, 1])),
            ("mea", club([1, 4, 1, 1, 2], [1, 3, 0, 3, 2], [4, 1, 0, 2], [1, 5, 0, 0, 1])),
            // Department associations
            ("codeio", club([5, 3, 1, 1, 2], [3, 1, 4, 1, 1], [5, 1, 0, 2], [4, 3, 0, 0, 1])),
            ("protocol", club([4, 2, 2, 2, 2], [2, 1, 3, 1, 1], [4, 1, 0, 2], [3, 3, 0, 0, 2])),
            ("iseclub", club([4, 2, 2, 2, 2], [3, 1, 3, 1, 1], [4, 2, 1, 2], [3, 3, 1, 0, 2])),
            // Entrepreneurship and business
            ("edc", club([1, 2, 4, 4, 3], [1, 0, 2, 0, 5], [2, 2, 1, 5], [1, 1, 1, 1, 2])),
            ("ciie", club([1, 2, 4, 4, 2], [2, 0, 2, 0, 5], [2, 2, 0, 5], [1, 1, 0, 0, 2])),
            ("iic", club([1, 2, 4, 3, 2], [2, 0, 2, 0, 5], [2, 2, 0, 5], [1, 1, 0, 0, 2])),
            ("business-insights", club([1, 1, 4, 4, 2], [1, 0, 1, 0, 5], [1, 2, 0, 5], [0, 1, 1, 0, 2])),
            // Medtech and interdisciplinary
            ("corrtechs", club([2, 3, 2, 2, 2], [3, 2, 2, 3, 2], [4, 4, 0, 3], [2, 3, 0, 0, 2])),
            ("synapse", club([1, 2, 2, 2, 2], [2, 1, 1, 2, 2], [3, 3, 1, 2], [1, 3, 1, 0, 2])),
            // Mathematics
            ("pentagram", club([3, 1, 2, 2, 2], [3, 1, 2, 1, 1], [3, 1, 1, 1], [3, 2, 0, 0, 2])),
            // Service and community
            ("nss", club([0, 1, 4, 3, 2], [0, 0, 0, 0, 3], [0, 5, 2, 1], [0, 0, 2, 1, 3])),
            ("rotaract", club([0, 1, 5, 4, 2], [0, 0, 0, 0, 4], [0, 5, 2, 2], [0, 0, 2, 1, 3])),
            ("leosatva", club([0, 1, 4, 4, 2], [0, 0, 0, 0, 3], [0, 5, 1, 2], [0, 0, 1, 1, 3])),
            ("mountaineering", club([0, 1, 2, 1, 3], [0, 0, 0, 0, 1], [0, 3, 2, 1], [0, 0, 1, 5, 2])),
            ("respawn", club([1, 2, 3, 1, 3], [1, 0, 1, 0, 2], [2, 3, 3, 1], [1, 1, 2, 3, 2])),
            // Music and dance
            ("ninaad", club([0, 1, 1, 3, 5], [0, 0, 0, 0, 1], [0, 2, 5, 0], [0, 0, 5, 0, 2])),
            ("groovehouse", club([0, 2, 2, 3, 5], [0, 0, 1, 1, 1], [0, 2, 5, 1], [0, 0, 5, 0, 2])),
            ("paramvah", club([0, 2, 1, 2, 5], [0, 0, 0, 0, 1], [0, 2, 5, 0], [0, 0, 5, 1, 2])),
            ("danzaddix", club([0, 2, 1, 2, 5], [0, 0, 0, 0, 1], [0, 2, 5, 0], [0, 0, 5, 1, 2])),
            // Arts, literature, and stage
            ("inksanity", club([0, 1, 2, 5, 4], [0, 0, 1, 0, 2], [0, 3, 5, 1], [0, 0, 5, 0, 2])),
            ("finearts", club([0, 3, 1, 1, 5], [0, 0, 1, 0, 0], [0, 2, 5, 0], [0, 0, 5, 0, 2])),
            ("falcons", club([1, 4, 2, 1, 5], [1, 1, 2, 1, 1], [2, 2, 5, 1], [0, 1, 4, 1, 2])),
            ("pravrutthi", club([0, 2, 2, 5, 5], [0, 0, 0, 0, 1], [0, 3, 5, 0], [0, 0, 5, 0, 2])),
            ("panache", club([0, 4, 3, 2, 5], [0, 0, 1, 0, 2], [0, 2, 5, 2], [0, 0, 5, 0, 2])),
            ("chiranthana", club([0, 1, 2, 3, 4], [0, 0, 0, 0, 1], [0, 2, 5, 0], [0, 0, 5, 0, 2])),
            ("samskruthi", club([0, 2, 2, 3, 5], [0, 0, 0, 0, 1], [0, 2, 5, 0], [0, 0, 5, 0, 2])),
            ("munsoc", club([0, 1, 4, 5, 2], [0, 0, 0, 0, 4], [0, 4, 3, 2], [0, 0, 3, 0, 2])),
        ];

        Self {
            rules: entries
                .into_iter()
                .map(|(slug, rules)| (slug.to_string(), rules))
                .collect(),
        }
    }
}

fn club(enjoy: [i32; 5], domain: [i32; 5], impact: [i32; 4], past: [i32; 5]) -> ClubRules {
    ClubRules {
        enjoy: EnjoyAnswer::ALL.into_iter().zip(enjoy).collect(),
        domain: DomainAnswer::ALL.into_iter().zip(domain).collect(),
        impact: ImpactAnswer::ALL.into_iter().zip(impact).collect(),
        past: PastAnswer::ALL.into_iter().zip(past).collect(),
    }
}
