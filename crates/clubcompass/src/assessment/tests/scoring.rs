use super::common::*;
use crate::assessment::domain::{
    DomainAnswer, EnjoyAnswer, ImpactAnswer, PastAnswer, Question, QuizResponses, TimeCommitment,
};
use crate::assessment::{RecommendationEngine, ScoringTable};

#[test]
fn weights_for_each_answer_sum_into_score() {
    let engine = RecommendationEngine::new(single_club_table());

    let (score, reasoning) = engine.score_club("circuitry", &sample_responses());

    assert_eq!(score, 14);
    assert_eq!(reasoning.len(), 4);

    assert_eq!(reasoning[0].question, Question::Enjoy.prompt());
    assert_eq!(reasoning[0].answer, "Coding / problem solving");
    assert_eq!(reasoning[0].contribution, 4);

    assert_eq!(reasoning[1].question, Question::Domain.prompt());
    assert_eq!(reasoning[1].contribution, 3);

    assert_eq!(reasoning[2].question, Question::Impact.prompt());
    assert_eq!(reasoning[2].contribution, 4);

    assert_eq!(reasoning[3].question, Question::Past.prompt());
    assert_eq!(reasoning[3].answer, "Coding competitions");
    assert_eq!(reasoning[3].contribution, 3);
}

#[test]
fn builtin_table_covers_the_campus_roster() {
    let table = ScoringTable::builtin();

    assert_eq!(table.len(), 48);
    assert!(table.covers("acm"));
    assert!(table.covers("munsoc"));
    assert!(!table.covers("chess-circle"));
    assert!(!table.is_empty());
}

#[test]
fn builtin_weights_score_the_flagship_coding_club() {
    let engine = RecommendationEngine::new(ScoringTable::builtin());

    let (score, reasoning) = engine.score_club("acm", &sample_responses());

    assert_eq!(score, 14);
    assert_eq!(reasoning.len(), 4);
}

#[test]
fn cultural_answers_favor_the_music_ensemble() {
    let engine = RecommendationEngine::new(ScoringTable::builtin());

    let (score, reasoning) = engine.score_club("ninaad", &cultural_responses());

    assert_eq!(score, 16);
    assert_eq!(reasoning.len(), 4);
    assert_eq!(reasoning[0].answer, "Creative arts");
    assert_eq!(reasoning[0].contribution, 5);
}

#[test]
fn time_commitment_never_contributes() {
    let engine = RecommendationEngine::new(ScoringTable::builtin());
    let mut responses = sample_responses();

    let baseline = engine.score_club("acm", &responses);

    for time in [TimeCommitment::Low, TimeCommitment::Medium, TimeCommitment::High] {
        responses.time = time;
        let outcome = engine.score_club("acm", &responses);
        assert_eq!(outcome, baseline);
    }

    let (_, reasoning) = baseline;
    assert!(reasoning
        .iter()
        .all(|item| item.question != Question::Time.prompt()));
}

#[test]
fn unmatched_answers_score_zero_without_reasoning() {
    let engine = RecommendationEngine::new(single_club_table());
    let responses = QuizResponses {
        enjoy: EnjoyAnswer::Organizing,
        time: TimeCommitment::Medium,
        domain: DomainAnswer::Web,
        impact: ImpactAnswer::Social,
        past: PastAnswer::Sports,
    };

    let (score, reasoning) = engine.score_club("circuitry", &responses);

    assert_eq!(score, 0);
    assert!(reasoning.is_empty());
}

#[test]
fn negative_weight_lowers_total_but_stays_out_of_reasoning() {
    let engine = RecommendationEngine::new(penalty_table());

    let (score, reasoning) = engine.score_club("debate", &sample_responses());

    // enjoy -2 and two explicit zeros land in the total; only domain +3 reads
    // back as a reason.
    assert_eq!(score, 1);
    assert_eq!(reasoning.len(), 1);
    assert_eq!(reasoning[0].question, Question::Domain.prompt());
    assert_eq!(reasoning[0].contribution, 3);
}

#[test]
fn clubs_missing_from_the_table_score_zero() {
    let engine = RecommendationEngine::new(single_club_table());

    let (score, reasoning) = engine.score_club("phantom", &sample_responses());

    assert_eq!(score, 0);
    assert!(reasoning.is_empty());
}

#[test]
fn scoring_is_deterministic() {
    let engine = RecommendationEngine::new(ScoringTable::builtin());
    let responses = sample_responses();

    let first = engine.score_club("gdscl", &responses);
    for _ in 0..3 {
        assert_eq!(engine.score_club("gdscl", &responses), first);
    }
}
