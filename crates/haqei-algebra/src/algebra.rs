use haqei_types::Trigram;
use serde::{Deserialize, Serialize};

use crate::error::AlgebraError;
use crate::hexagram::Hexagram;
use crate::king_wen::KingWen;

/// The four canonical relations of a hexagram, as King Wen numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRelations {
    /// The hexagram these relations belong to
    pub hexagram: u8,
    /// 綜卦
    pub inverse: u8,
    /// 錯卦
    pub complement: u8,
    /// 互卦
    pub nuclear: u8,
    /// 爻変 for lines 0 (初爻) through 5 (上爻)
    pub mutations: [u8; 6],
}

/// Relation algebra addressed by King Wen number.
///
/// Each operation converts the number to its bit pattern, applies the
/// bit-level transform from [`Hexagram`], and converts back.
#[derive(Clone, Debug, Default)]
pub struct HexagramAlgebra {
    king_wen: KingWen,
}

impl HexagramAlgebra {
    pub fn new(king_wen: KingWen) -> Self {
        Self { king_wen }
    }

    pub fn king_wen(&self) -> &KingWen {
        &self.king_wen
    }

    pub fn hexagram(&self, number: u8) -> Result<Hexagram, AlgebraError> {
        self.king_wen.hexagram(number)
    }

    pub fn number(&self, hexagram: Hexagram) -> u8 {
        self.king_wen.number(hexagram)
    }

    pub fn inverse(&self, number: u8) -> Result<u8, AlgebraError> {
        self.map(number, Hexagram::inverse)
    }

    pub fn complement(&self, number: u8) -> Result<u8, AlgebraError> {
        self.map(number, Hexagram::complement)
    }

    pub fn nuclear(&self, number: u8) -> Result<u8, AlgebraError> {
        self.map(number, Hexagram::nuclear)
    }

    pub fn line_mutation(&self, number: u8, line: u8) -> Result<u8, AlgebraError> {
        let mutated = self.hexagram(number)?.mutate(line)?;
        Ok(self.number(mutated))
    }

    /// 之卦 for a set of changing lines.
    pub fn changing(&self, number: u8, lines: &[u8]) -> Result<u8, AlgebraError> {
        let changed = self.hexagram(number)?.changing(lines)?;
        Ok(self.number(changed))
    }

    pub fn relations(&self, number: u8) -> Result<HexagramRelations, AlgebraError> {
        let h = self.hexagram(number)?;
        Ok(HexagramRelations {
            hexagram: number,
            inverse: self.number(h.inverse()),
            complement: self.number(h.complement()),
            nuclear: self.number(h.nuclear()),
            mutations: h.mutations().map(|m| self.number(m)),
        })
    }

    /// (upper, lower)
    pub fn trigrams(&self, number: u8) -> Result<(Trigram, Trigram), AlgebraError> {
        let h = self.hexagram(number)?;
        Ok((h.upper(), h.lower()))
    }

    pub fn from_trigrams(&self, upper: Trigram, lower: Trigram) -> u8 {
        self.number(Hexagram::from_trigrams(upper, lower))
    }

    fn map(&self, number: u8, f: impl Fn(Hexagram) -> Hexagram) -> Result<u8, AlgebraError> {
        let h = self.hexagram(number)?;
        Ok(self.number(f(h)))
    }
}
