use std::cmp::Ordering;
use std::sync::Arc;

use haqei_content::{ContentStore, ResolverConfig};
use haqei_types::{AffinityVector, ElementRelation, Trigram};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ResolveError;

/// Dominant and secondary trigram of an affinity vector, with their
/// directed narrative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    pub primary: Trigram,
    pub secondary: Trigram,
    pub primary_score: f64,
    pub secondary_score: f64,
    /// Narrative with `primary` as the base trigram
    pub synergy_text: String,
    pub conflict_text: String,
    /// `primary_score - secondary_score`, clamped to [0, 1]
    pub confidence: f64,
    /// Confidence fell below the configured threshold
    pub ambiguous: bool,
    /// Five-element relation of the primary towards the secondary
    pub element_relation: ElementRelation,
}

/// InteractionResolver: ranks an affinity vector and resolves its top pair.
#[derive(Clone, Debug)]
pub struct InteractionResolver {
    content: Arc<ContentStore>,
    config: ResolverConfig,
}

impl InteractionResolver {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self::with_config(content, ResolverConfig::default())
    }

    pub fn with_config(content: Arc<ContentStore>, config: ResolverConfig) -> Self {
        Self { content, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// All eight trigrams, highest score first.
    ///
    /// Equal scores are ordered by ascending trigram id, so the ranking is a
    /// total order and never depends on input layout.
    pub fn ranking(&self, vector: &AffinityVector) -> Result<Vec<(Trigram, f64)>, ResolveError> {
        for (trigram, value) in vector.iter() {
            if !value.is_finite() || value < 0.0 {
                warn!(trigram = trigram.id(), value, "Rejected affinity vector");
                return Err(ResolveError::InvalidAffinity { trigram, value });
            }
        }

        let mut ranked: Vec<(Trigram, f64)> = vector.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.id().cmp(&b.0.id()))
        });
        Ok(ranked)
    }

    /// Resolve the dominant pair of `vector`.
    ///
    /// A vector with a single non-zero entry still yields a secondary: the
    /// lowest-id trigram among the zero scores.
    pub fn resolve(&self, vector: &AffinityVector) -> Result<InteractionResult, ResolveError> {
        let ranked = self.ranking(vector)?;
        let (primary, primary_score) = ranked[0];
        let (secondary, secondary_score) = ranked[1];

        let interaction = self.content.interaction(primary, secondary)?;
        let confidence = (primary_score - secondary_score).clamp(0.0, 1.0);
        let ambiguous = confidence < self.config.ambiguity_threshold;
        let element_relation = primary.element().relation_to(secondary.element());

        debug!(
            primary = primary.id(),
            secondary = secondary.id(),
            primary_score,
            secondary_score,
            confidence,
            ambiguous,
            "Resolved interaction"
        );

        Ok(InteractionResult {
            primary,
            secondary,
            primary_score,
            secondary_score,
            synergy_text: interaction.synergy.clone(),
            conflict_text: interaction.conflict.clone(),
            confidence,
            ambiguous,
            element_relation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> InteractionResolver {
        InteractionResolver::new(ContentStore::embedded().unwrap())
    }

    fn vector(values: [f64; 8]) -> AffinityVector {
        AffinityVector::new(values)
    }

    #[test]
    fn picks_top_two() {
        let result = resolver()
            .resolve(&vector([0.05, 0.1, 0.5, 0.05, 0.05, 0.15, 0.05, 0.05]))
            .unwrap();
        assert_eq!(result.primary, Trigram::Li);
        assert_eq!(result.secondary, Trigram::Kan);
        assert!((result.confidence - 0.35).abs() < 1e-12);
        assert!(!result.ambiguous);
        // 水剋火
        assert_eq!(result.element_relation, ElementRelation::RestrainedBy);
    }

    #[test]
    fn narrative_uses_primary_as_base() {
        let store = ContentStore::embedded().unwrap();
        let result = resolver()
            .resolve(&vector([0.4, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .unwrap();
        let expected = store.interaction(Trigram::Li, Trigram::Qian).unwrap();
        assert_eq!(result.synergy_text, expected.synergy);
        assert_eq!(result.conflict_text, expected.conflict);
        assert_ne!(
            result.synergy_text,
            store.interaction(Trigram::Qian, Trigram::Li).unwrap().synergy
        );
    }

    #[test]
    fn ties_break_toward_lower_id() {
        let result = resolver()
            .resolve(&vector([0.1, 0.1, 0.1, 0.1, 0.1, 0.2, 0.1, 0.2]))
            .unwrap();
        assert_eq!(result.primary, Trigram::Kan);
        assert_eq!(result.secondary, Trigram::Kun);
        assert_eq!(result.confidence, 0.0);
        assert!(result.ambiguous);
    }

    #[test]
    fn concentrated_vector_still_has_secondary() {
        let result = resolver()
            .resolve(&vector([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]))
            .unwrap();
        assert_eq!(result.primary, Trigram::Xun);
        assert_eq!(result.secondary, Trigram::Qian);
        assert_eq!(result.secondary_score, 0.0);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn all_zero_vector_resolves_deterministically() {
        let result = resolver().resolve(&AffinityVector::zero()).unwrap();
        assert_eq!(result.primary, Trigram::Qian);
        assert_eq!(result.secondary, Trigram::Dui);
        assert!(result.ambiguous);
    }

    #[test]
    fn threshold_is_configurable() {
        let v = vector([0.3, 0.2, 0.1, 0.1, 0.1, 0.1, 0.05, 0.05]);
        let strict = resolver().resolve(&v).unwrap();
        assert!(strict.ambiguous);

        let lenient = InteractionResolver::with_config(
            ContentStore::embedded().unwrap(),
            ResolverConfig {
                ambiguity_threshold: 0.05,
            },
        )
        .resolve(&v)
        .unwrap();
        assert!(!lenient.ambiguous);
    }

    #[test]
    fn rejects_negative_and_nan() {
        let err = resolver()
            .resolve(&vector([0.5, -0.1, 0.6, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidAffinity {
                trigram: Trigram::Dui,
                value: -0.1
            }
        );

        let err = resolver()
            .resolve(&vector([0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, f64::NAN]))
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidAffinity { trigram: Trigram::Kun, .. }
        ));
    }

    #[test]
    fn ranking_is_complete() {
        let ranked = resolver()
            .ranking(&vector([0.1, 0.3, 0.0, 0.2, 0.1, 0.0, 0.3, 0.0]))
            .unwrap();
        let order: Vec<u8> = ranked.iter().map(|(t, _)| t.id()).collect();
        assert_eq!(order, vec![2, 7, 4, 1, 5, 3, 6, 8]);
    }
}
