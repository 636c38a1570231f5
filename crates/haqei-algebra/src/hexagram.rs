use haqei_types::Trigram;
use serde::{Deserialize, Serialize};

use crate::error::AlgebraError;

/// Number of lines in a hexagram.
pub const LINE_COUNT: u8 = 6;

const MASK: u8 = 0b11_1111;

/// A single line: yang (solid, 1) or yin (broken, 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Line {
    Yin,
    Yang,
}

impl Line {
    pub fn is_yang(self) -> bool {
        matches!(self, Line::Yang)
    }
}

/// A hexagram as its 6-bit line pattern.
///
/// Bit 0 is the bottom line (初爻), bit 5 the top line (上爻); 1 is yang.
/// All 64 patterns are valid, including 0 (坤) and 63 (乾). Every relation
/// is computed from the bits; nothing is looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Hexagram(u8);

impl Hexagram {
    pub fn from_bits(bits: u8) -> Result<Self, AlgebraError> {
        if bits > MASK {
            return Err(AlgebraError::bits_out_of_range(bits));
        }
        Ok(Self(bits))
    }

    /// Stack `upper` over `lower`.
    pub fn from_trigrams(upper: Trigram, lower: Trigram) -> Self {
        Self((upper.bits() << 3) | lower.bits())
    }

    /// Build from lines listed bottom to top.
    pub fn from_lines(lines: [Line; 6]) -> Self {
        let bits = lines
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, line)| acc | ((line.is_yang() as u8) << i));
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn upper(self) -> Trigram {
        Trigram::from_low_bits(self.0 >> 3)
    }

    pub fn lower(self) -> Trigram {
        Trigram::from_low_bits(self.0)
    }

    pub fn line(self, index: u8) -> Result<Line, AlgebraError> {
        check_line(index)?;
        Ok(self.line_unchecked(index))
    }

    /// All six lines, bottom first.
    pub fn lines(self) -> [Line; 6] {
        std::array::from_fn(|i| self.line_unchecked(i as u8))
    }

    pub fn yang_count(self) -> u32 {
        self.0.count_ones()
    }

    /// 綜卦: the hexagram turned upside down.
    pub fn inverse(self) -> Self {
        Self(self.0.reverse_bits() >> 2)
    }

    /// 錯卦: every line changed.
    pub fn complement(self) -> Self {
        Self(self.0 ^ MASK)
    }

    /// 互卦: lines 2-4 become the lower trigram, lines 3-5 the upper.
    pub fn nuclear(self) -> Self {
        let lower = (self.0 >> 1) & 0b111;
        let upper = (self.0 >> 2) & 0b111;
        Self((upper << 3) | lower)
    }

    /// 爻変: the hexagram reached by changing one line (0 = bottom).
    pub fn mutate(self, line: u8) -> Result<Self, AlgebraError> {
        check_line(line)?;
        Ok(Self(self.0 ^ (1 << line)))
    }

    /// 之卦: the hexagram reached by changing every listed line at once.
    ///
    /// Lines must be distinct; an empty list returns `self`.
    pub fn changing(self, lines: &[u8]) -> Result<Self, AlgebraError> {
        let mut mask = 0u8;
        for &line in lines {
            check_line(line)?;
            let bit = 1 << line;
            if mask & bit != 0 {
                return Err(AlgebraError::DuplicateLine { line });
            }
            mask |= bit;
        }
        Ok(Self(self.0 ^ mask))
    }

    /// Reads the same top-down and bottom-up, so it is its own 綜卦.
    pub fn is_palindrome(self) -> bool {
        self.inverse() == self
    }

    /// 純卦: the same trigram doubled.
    pub fn is_pure(self) -> bool {
        self.0 >> 3 == self.0 & 0b111
    }

    /// 正位 per line: yang on odd positions (1, 3, 5), yin on even ones.
    pub fn correct_positions(self) -> [bool; 6] {
        // Position 1 is bit 0, so "odd position" means an even bit index.
        std::array::from_fn(|i| self.line_unchecked(i as u8).is_yang() == (i % 2 == 0))
    }

    /// 応 for the pairs (1,4), (2,5), (3,6): lines of opposite polarity.
    pub fn correspondences(self) -> [bool; 3] {
        std::array::from_fn(|i| {
            self.line_unchecked(i as u8) != self.line_unchecked(i as u8 + 3)
        })
    }

    /// All single-line mutations, bottom line first.
    pub fn mutations(self) -> [Hexagram; 6] {
        std::array::from_fn(|i| Self(self.0 ^ (1 << i)))
    }

    fn line_unchecked(self, index: u8) -> Line {
        if self.0 & (1 << index) != 0 {
            Line::Yang
        } else {
            Line::Yin
        }
    }
}

impl From<Hexagram> for u8 {
    fn from(hexagram: Hexagram) -> u8 {
        hexagram.0
    }
}

impl TryFrom<u8> for Hexagram {
    type Error = AlgebraError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Hexagram::from_bits(bits)
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06b}", self.0)
    }
}

pub(crate) fn check_line(line: u8) -> Result<(), AlgebraError> {
    if line >= LINE_COUNT {
        return Err(AlgebraError::InvalidLine { line });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const QIAN: Hexagram = Hexagram(0b111111);
    const KUN: Hexagram = Hexagram(0b000000);

    #[test]
    fn rejects_seven_bit_values() {
        assert!(Hexagram::from_bits(63).is_ok());
        assert!(matches!(
            Hexagram::from_bits(64),
            Err(AlgebraError::InvalidHexagram { .. })
        ));
    }

    #[test]
    fn trigram_decomposition() {
        // 水雷屯: water over thunder, lines 100010 bottom-first
        let zhun = Hexagram::from_trigrams(Trigram::Kan, Trigram::Zhen);
        assert_eq!(zhun.bits(), 0b010_001);
        assert_eq!(zhun.upper(), Trigram::Kan);
        assert_eq!(zhun.lower(), Trigram::Zhen);
        for upper in Trigram::ALL {
            for lower in Trigram::ALL {
                let h = Hexagram::from_trigrams(upper, lower);
                assert_eq!((h.upper(), h.lower()), (upper, lower));
            }
        }
    }

    #[test]
    fn lines_round_trip() {
        for bits in 0..=63 {
            let h = Hexagram(bits);
            assert_eq!(Hexagram::from_lines(h.lines()), h);
        }
        assert_eq!(QIAN.line(5).unwrap(), Line::Yang);
        assert!(QIAN.line(6).is_err());
    }

    #[test]
    fn only_four_doubled_trigrams_are_palindromes() {
        // 山雷頤 (100001) reads the same both ways but is not a doubled trigram.
        let yi = Hexagram(0b100001);
        assert!(yi.is_palindrome());
        assert!(!yi.is_pure());

        // 乾 坤 坎 離
        let both: Vec<u8> = (0..=63)
            .filter(|b| Hexagram(*b).is_pure() && Hexagram(*b).is_palindrome())
            .collect();
        assert_eq!(both, vec![0, 18, 45, 63]);

        // 震為雷 turned over is 艮為山
        let zhen = Hexagram::from_trigrams(Trigram::Zhen, Trigram::Zhen);
        assert_eq!(
            zhen.inverse(),
            Hexagram::from_trigrams(Trigram::Gen, Trigram::Gen)
        );

        let palindromes = (0..=63).filter(|b| Hexagram(*b).is_palindrome()).count();
        assert_eq!(palindromes, 8);
    }

    #[test]
    fn qian_and_kun_relations() {
        assert_eq!(QIAN.inverse(), QIAN);
        assert_eq!(QIAN.complement(), KUN);
        assert_eq!(QIAN.nuclear(), QIAN);
        assert_eq!(KUN.nuclear(), KUN);
        assert_eq!(QIAN.mutate(0).unwrap().bits(), 0b111110);
    }

    #[test]
    fn mutate_rejects_line_six() {
        assert_eq!(QIAN.mutate(6), Err(AlgebraError::InvalidLine { line: 6 }));
    }

    #[test]
    fn changing_lines() {
        assert_eq!(QIAN.changing(&[]).unwrap(), QIAN);
        assert_eq!(QIAN.changing(&[0, 1, 2, 3, 4, 5]).unwrap(), KUN);
        assert_eq!(QIAN.changing(&[2]).unwrap(), QIAN.mutate(2).unwrap());
        assert_eq!(
            QIAN.changing(&[1, 1]),
            Err(AlgebraError::DuplicateLine { line: 1 })
        );
        assert_eq!(
            QIAN.changing(&[0, 9]),
            Err(AlgebraError::InvalidLine { line: 9 })
        );
    }

    #[test]
    fn correct_positions_of_ji_ji() {
        // 水火既済 (101010 bottom-first) has every line in its correct place.
        let ji_ji = Hexagram::from_trigrams(Trigram::Kan, Trigram::Li);
        assert_eq!(ji_ji.correct_positions(), [true; 6]);
        assert_eq!(ji_ji.complement().correct_positions(), [false; 6]);
        assert_eq!(ji_ji.correspondences(), [true; 3]);
        assert_eq!(QIAN.correspondences(), [false; 3]);
    }

    #[test]
    fn display_is_top_line_first() {
        assert_eq!(Hexagram(0b000001).to_string(), "000001");
    }
}
