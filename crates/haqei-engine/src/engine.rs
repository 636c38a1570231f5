use std::sync::Arc;

use haqei_algebra::HexagramAlgebra;
use haqei_content::{ContentError, ContentStore, EngineConfig, TrigramRecord};
use haqei_resolver::{InteractionResolver, InteractionResult};
use haqei_scorer::ArchetypeScorer;
use haqei_types::{AffinityVector, TraitProfile, Trigram};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::EngineError;

/// A hexagram and the line currently in focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramContext {
    /// King Wen number, 1-64
    pub hexagram: u8,
    /// Line index, 0 (初爻) to 5 (上爻)
    pub line: u8,
}

impl HexagramContext {
    pub fn new(hexagram: u8, line: u8) -> Self {
        Self { hexagram, line }
    }
}

/// Relations and master data for a [`HexagramContext`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramReading {
    pub hexagram: u8,
    pub name: String,
    pub theme: String,
    pub upper: Trigram,
    pub lower: Trigram,
    pub line: u8,
    /// 綜卦
    pub inverse: u8,
    /// 錯卦
    pub complement: u8,
    /// 互卦
    pub nuclear: u8,
    /// 爻変 at `line`
    pub line_mutation: u8,
}

/// Everything `build_profile` produces for one trait profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileResult {
    pub affinity: AffinityVector,
    pub interaction: InteractionResult,
    pub primary_archetype: TrigramRecord,
    pub secondary_archetype: TrigramRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexagram: Option<HexagramReading>,
}

/// ProfileEngine: scorer, resolver and algebra over one shared content store.
///
/// Holds no mutable state, so a single engine can serve any number of
/// threads at once.
#[derive(Clone, Debug)]
pub struct ProfileEngine {
    content: Arc<ContentStore>,
    algebra: HexagramAlgebra,
    scorer: ArchetypeScorer,
    resolver: InteractionResolver,
}

impl ProfileEngine {
    pub fn new(content: Arc<ContentStore>, config: &EngineConfig) -> Self {
        Self {
            algebra: HexagramAlgebra::default(),
            scorer: ArchetypeScorer::with_config(content.clone(), config.scorer.clone()),
            resolver: InteractionResolver::with_config(content.clone(), config.resolver.clone()),
            content,
        }
    }

    /// Engine over the content source named in `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        let content = config.content.load_store()?;
        info!(
            version = content.version(),
            threshold = config.resolver.ambiguity_threshold,
            "Profile engine ready"
        );
        Ok(Self::new(content, config))
    }

    /// Replace the King Wen numbering used for hexagram enrichment.
    pub fn with_algebra(mut self, algebra: HexagramAlgebra) -> Self {
        self.algebra = algebra;
        self
    }

    pub fn content(&self) -> &Arc<ContentStore> {
        &self.content
    }

    pub fn algebra(&self) -> &HexagramAlgebra {
        &self.algebra
    }

    pub fn scorer(&self) -> &ArchetypeScorer {
        &self.scorer
    }

    pub fn resolver(&self) -> &InteractionResolver {
        &self.resolver
    }

    /// Score `profile`, resolve its dominant pair and, when a context is
    /// given, attach that hexagram's relations.
    ///
    /// Component errors are returned as-is inside [`EngineError`].
    pub fn build_profile(
        &self,
        profile: &TraitProfile,
        hexagram_context: Option<HexagramContext>,
    ) -> Result<ProfileResult, EngineError> {
        let affinity = self.scorer.score(profile)?;
        let interaction = self.resolver.resolve(&affinity)?;

        let hexagram = match hexagram_context {
            Some(context) => Some(self.read_hexagram(context)?),
            None => None,
        };

        debug!(
            inputs = profile.len(),
            primary = interaction.primary.id(),
            secondary = interaction.secondary.id(),
            hexagram = hexagram.as_ref().map(|h| h.hexagram),
            "Profile built"
        );

        Ok(ProfileResult {
            primary_archetype: self.content.trigram(interaction.primary).clone(),
            secondary_archetype: self.content.trigram(interaction.secondary).clone(),
            affinity,
            interaction,
            hexagram,
        })
    }

    /// Relations of a hexagram, independent of any trait profile.
    pub fn read_hexagram(&self, context: HexagramContext) -> Result<HexagramReading, EngineError> {
        let number = context.hexagram;
        let line_mutation = self.algebra.line_mutation(number, context.line)?;
        let (upper, lower) = self.algebra.trigrams(number)?;
        let record = self
            .content
            .hexagram(number)
            .ok_or_else(|| ContentError::Invalid {
                table: "hexagrams_master",
                reason: format!("no record for hexagram {}", number),
            })?;

        Ok(HexagramReading {
            hexagram: number,
            name: record.name.clone(),
            theme: record.theme.clone(),
            upper,
            lower,
            line: context.line,
            inverse: self.algebra.inverse(number)?,
            complement: self.algebra.complement(number)?,
            nuclear: self.algebra.nuclear(number)?,
            line_mutation,
        })
    }
}
