//! End-to-end scenarios through the profile engine.

use std::sync::Arc;
use std::thread;

use haqei_algebra::AlgebraError;
use haqei_content::ContentStore;
use haqei_engine::{EngineConfig, EngineError, HexagramContext, ProfileEngine};
use haqei_scorer::ScoreError;
use haqei_types::{Framework, TraitInput, TraitProfile, Trigram};
use proptest::prelude::*;

fn engine() -> ProfileEngine {
    ProfileEngine::new(ContentStore::embedded().unwrap(), &EngineConfig::default())
}

fn intj() -> TraitProfile {
    TraitProfile::new().with(TraitInput::mbti("INTJ", 1.0))
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn intj_primary_is_qian() {
    let result = engine().build_profile(&intj(), None).unwrap();
    assert_eq!(result.interaction.primary.id(), 1);
    assert!((result.affinity.total() - 1.0).abs() < 1e-9);
    assert_eq!(result.primary_archetype.name, "乾");
}

#[test]
fn qian_context_relations() {
    let result = engine()
        .build_profile(&intj(), Some(HexagramContext::new(1, 5)))
        .unwrap();
    let reading = result.hexagram.unwrap();
    assert_eq!(reading.inverse, 1);
    assert_eq!(reading.complement, 2);
    assert_eq!(reading.nuclear, 1);
    // 上爻変: 沢天夬
    assert_eq!(reading.line_mutation, 43);
}

#[test]
fn empty_profile_propagates() {
    let err = engine().build_profile(&TraitProfile::new(), None).unwrap_err();
    assert_eq!(err, EngineError::Score(ScoreError::EmptyProfile));
    assert_eq!(err.to_string(), ScoreError::EmptyProfile.to_string());
}

#[test]
fn duplicate_intj_propagates() {
    let profile = intj().with(TraitInput::mbti("INTJ", 0.4));
    let err = engine().build_profile(&profile, None).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Score(ScoreError::DuplicateTrait { framework: Framework::Mbti, .. })
    ));
}

#[test]
fn invalid_hexagram_context_propagates() {
    let err = engine()
        .build_profile(&intj(), Some(HexagramContext::new(65, 0)))
        .unwrap_err();
    assert!(matches!(err, EngineError::Algebra(AlgebraError::InvalidHexagram { .. })));

    let err = engine()
        .build_profile(&intj(), Some(HexagramContext::new(12, 6)))
        .unwrap_err();
    assert_eq!(err, EngineError::Algebra(AlgebraError::InvalidLine { line: 6 }));
}

#[test]
fn scoring_errors_win_over_context_errors() {
    let err = engine()
        .build_profile(&TraitProfile::new(), Some(HexagramContext::new(0, 9)))
        .unwrap_err();
    assert_eq!(err, EngineError::Score(ScoreError::EmptyProfile));
}

#[test]
fn mixed_profile_result_serializes() {
    let profile = TraitProfile::new()
        .with(TraitInput::mbti("ENFP", 1.0))
        .with(TraitInput::enneagram("7", 0.6))
        .with(TraitInput::strength("Woo", 0.5));
    let result = engine()
        .build_profile(&profile, Some(HexagramContext::new(63, 2)))
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["affinity"].as_array().unwrap().len(), 8);
    assert_eq!(json["hexagram"]["name"], "水火既済");
    assert_eq!(json["hexagram"]["upper"], Trigram::Kan.id());
    assert_eq!(json["hexagram"]["lower"], Trigram::Li.id());
    assert!(json["interaction"]["synergy_text"].is_string());

    let without = engine().build_profile(&profile, None).unwrap();
    let json = serde_json::to_value(&without).unwrap();
    assert!(json.get("hexagram").is_none());
}

#[test]
fn engine_is_shared_across_threads() {
    let engine = Arc::new(engine());
    let expected = engine.build_profile(&intj(), None).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.build_profile(&intj(), None).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Enrichment never changes the scoring path.
    #[test]
    fn context_does_not_affect_interaction(hexagram in 1u8..=64, line in 0u8..6) {
        let engine = engine();
        let plain = engine.build_profile(&intj(), None).unwrap();
        let enriched = engine
            .build_profile(&intj(), Some(HexagramContext::new(hexagram, line)))
            .unwrap();
        prop_assert_eq!(plain.affinity, enriched.affinity);
        prop_assert_eq!(plain.interaction, enriched.interaction);
        let reading = enriched.hexagram.unwrap();
        prop_assert_eq!(engine.algebra().line_mutation(reading.line_mutation, line).unwrap(), hexagram);
    }
}
