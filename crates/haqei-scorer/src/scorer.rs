use std::collections::HashSet;
use std::sync::Arc;

use haqei_content::{ContentStore, ScorerConfig, WeightRow};
use haqei_types::{AffinityVector, Framework, TraitInput, TraitProfile, Trigram};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ScoreError;

/// One input's share of the affinity, before the profile is summed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub framework: Framework,
    /// Code as spelled in the weight table
    pub code: String,
    /// Caller-supplied weight
    pub weight: f64,
    /// Row scaled to a peak of 1.0, then multiplied by `weight`
    pub scores: AffinityVector,
}

/// ArchetypeScorer: turns a trait profile into a trigram affinity distribution.
///
/// Each framework's tables use their own native scale (MBTI rows run 1-5,
/// Enneagram rows 0.5-2.5), so every row is first divided by its own
/// maximum. After that, weighted rows from different frameworks are treated
/// as commensurable and simply summed. That is a modeling assumption of
/// this engine, not something the frameworks themselves establish.
#[derive(Clone, Debug)]
pub struct ArchetypeScorer {
    content: Arc<ContentStore>,
    config: ScorerConfig,
}

impl ArchetypeScorer {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self::with_config(content, ScorerConfig::default())
    }

    pub fn with_config(content: Arc<ContentStore>, config: ScorerConfig) -> Self {
        Self { content, config }
    }

    /// Score a profile into a distribution over the eight trigrams.
    ///
    /// The result is non-negative and sums to 1.0. Inputs are accumulated
    /// in profile order, so equal profiles give bit-identical vectors.
    pub fn score(&self, profile: &TraitProfile) -> Result<AffinityVector, ScoreError> {
        let contributions = self.contributions(profile)?;

        let mut accumulated = AffinityVector::zero();
        for contribution in &contributions {
            for (trigram, value) in contribution.scores.iter() {
                accumulated.add(trigram, value);
            }
        }

        let total = accumulated.total();
        if total.is_nan() || total <= self.config.zero_epsilon {
            warn!(total, inputs = profile.len(), "Trait profile produced zero affinity");
            return Err(ScoreError::ZeroAffinity { total });
        }

        let normalized = (*accumulated.values()).map(|v| v / total);
        debug!(inputs = profile.len(), total, "Trait profile scored");
        Ok(AffinityVector::new(normalized))
    }

    /// Validate the profile and expand each input into its weighted row.
    pub fn contributions(&self, profile: &TraitProfile) -> Result<Vec<Contribution>, ScoreError> {
        if profile.is_empty() {
            warn!("Rejected empty trait profile");
            return Err(ScoreError::EmptyProfile);
        }

        let mut seen = HashSet::new();
        let mut contributions = Vec::with_capacity(profile.len());
        for input in profile.iter() {
            check_weight(input)?;

            let key = (input.framework, input.normalized_code());
            if !seen.insert(key) {
                warn!(
                    framework = input.framework.as_str(),
                    code = input.code.as_str(),
                    "Rejected duplicate trait"
                );
                return Err(ScoreError::DuplicateTrait {
                    framework: input.framework,
                    code: input.code.clone(),
                });
            }

            let row = self
                .content
                .weight_row(input.framework, &input.code)
                .ok_or_else(|| {
                    warn!(
                        framework = input.framework.as_str(),
                        code = input.code.as_str(),
                        "Rejected unknown trait code"
                    );
                    ScoreError::UnknownTraitCode {
                        framework: input.framework,
                        code: input.code.clone(),
                    }
                })?;

            contributions.push(Contribution {
                framework: input.framework,
                code: row.code.clone(),
                weight: input.weight,
                scores: scaled_row(row, input.weight),
            });
        }
        Ok(contributions)
    }
}

fn check_weight(input: &TraitInput) -> Result<(), ScoreError> {
    if input.weight.is_finite() && (0.0..=1.0).contains(&input.weight) {
        return Ok(());
    }
    warn!(
        framework = input.framework.as_str(),
        code = input.code.as_str(),
        weight = input.weight,
        "Rejected trait weight outside [0, 1]"
    );
    Err(ScoreError::InvalidWeight {
        framework: input.framework,
        code: input.code.clone(),
        weight: input.weight,
    })
}

/// Row divided by its own maximum, then multiplied by the caller's weight.
fn scaled_row(row: &WeightRow, weight: f64) -> AffinityVector {
    let max = row.max();
    let mut scores = AffinityVector::zero();
    for trigram in Trigram::ALL {
        scores.add(trigram, row.get(trigram) / max * weight);
    }
    scores
}
