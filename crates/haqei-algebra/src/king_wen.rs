use crate::error::AlgebraError;
use crate::hexagram::Hexagram;

/// Traditional King Wen sequence: entry `n - 1` is the bit pattern of
/// hexagram `n` (bottom line in bit 0).
pub const TRADITIONAL_KING_WEN: [u8; 64] = [
    63, 0, 17, 34, 23, 58, 2, 16, // 乾 坤 屯 蒙 需 訟 師 比
    55, 59, 7, 56, 61, 47, 4, 8, // 小畜 履 泰 否 同人 大有 謙 豫
    25, 38, 3, 48, 41, 37, 32, 1, // 随 蠱 臨 観 噬嗑 賁 剥 復
    57, 39, 33, 30, 18, 45, 28, 14, // 无妄 大畜 頤 大過 坎 離 咸 恒
    60, 15, 40, 5, 53, 43, 20, 10, // 遯 大壮 晋 明夷 家人 睽 蹇 解
    35, 49, 31, 62, 24, 6, 26, 22, // 損 益 夬 姤 萃 升 困 井
    29, 46, 9, 36, 52, 11, 13, 44, // 革 鼎 震 艮 漸 帰妹 豊 旅
    54, 27, 50, 19, 51, 12, 21, 42, // 巽 兌 渙 節 中孚 小過 既済 未済
];

/// Bijection between King Wen numbers (1-64) and 6-bit line patterns.
///
/// The corpus numbers hexagrams in the King Wen order (卦番号) while the
/// algebra works on bit patterns; this table converts between the two.
/// A custom table can be injected, but it must be a permutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KingWen {
    to_bits: [u8; 64],
    to_number: [u8; 64],
}

impl KingWen {
    pub fn traditional() -> Self {
        Self::build(TRADITIONAL_KING_WEN)
    }

    /// Validate and adopt a table where entry `n - 1` is hexagram `n`'s bits.
    pub fn from_table(table: [u8; 64]) -> Result<Self, AlgebraError> {
        let mut seen = [false; 64];
        for (i, &bits) in table.iter().enumerate() {
            if bits > 63 {
                return Err(AlgebraError::InvalidKingWenTable {
                    reason: format!("entry for hexagram {} has pattern {} above 63", i + 1, bits),
                });
            }
            if seen[bits as usize] {
                return Err(AlgebraError::InvalidKingWenTable {
                    reason: format!("pattern {:06b} assigned to more than one hexagram", bits),
                });
            }
            seen[bits as usize] = true;
        }
        Ok(Self::build(table))
    }

    fn build(to_bits: [u8; 64]) -> Self {
        let mut to_number = [0u8; 64];
        for (i, &bits) in to_bits.iter().enumerate() {
            to_number[bits as usize] = i as u8 + 1;
        }
        Self { to_bits, to_number }
    }

    pub fn hexagram(&self, number: u8) -> Result<Hexagram, AlgebraError> {
        if !(1..=64).contains(&number) {
            return Err(AlgebraError::king_wen_out_of_range(number));
        }
        Hexagram::from_bits(self.to_bits[number as usize - 1])
    }

    pub fn number(&self, hexagram: Hexagram) -> u8 {
        self.to_number[hexagram.bits() as usize]
    }
}

impl Default for KingWen {
    fn default() -> Self {
        Self::traditional()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haqei_types::Trigram;

    #[test]
    fn traditional_table_is_a_permutation() {
        assert!(KingWen::from_table(TRADITIONAL_KING_WEN).is_ok());
    }

    #[test]
    fn round_trip_all_numbers() {
        let kw = KingWen::traditional();
        for n in 1..=64 {
            let h = kw.hexagram(n).unwrap();
            assert_eq!(kw.number(h), n);
        }
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        let kw = KingWen::traditional();
        assert!(kw.hexagram(0).is_err());
        assert!(kw.hexagram(65).is_err());
    }

    #[test]
    fn known_positions() {
        let kw = KingWen::traditional();
        // 11 地天泰: earth over heaven
        let tai = kw.hexagram(11).unwrap();
        assert_eq!(tai.upper(), Trigram::Kun);
        assert_eq!(tai.lower(), Trigram::Qian);
        // 63 水火既済: water over fire
        let ji_ji = kw.hexagram(63).unwrap();
        assert_eq!(ji_ji.upper(), Trigram::Kan);
        assert_eq!(ji_ji.lower(), Trigram::Li);
    }

    #[test]
    fn rejects_duplicate_patterns() {
        let mut table = TRADITIONAL_KING_WEN;
        table[1] = table[0];
        assert!(matches!(
            KingWen::from_table(table),
            Err(AlgebraError::InvalidKingWenTable { .. })
        ));
    }

    #[test]
    fn rejects_wide_patterns() {
        let mut table = TRADITIONAL_KING_WEN;
        table[5] = 64;
        assert!(KingWen::from_table(table).is_err());
    }

    #[test]
    fn injected_natural_order_table() {
        let natural: [u8; 64] = std::array::from_fn(|i| i as u8);
        let kw = KingWen::from_table(natural).unwrap();
        assert_eq!(kw.hexagram(1).unwrap().bits(), 0);
        assert_eq!(kw.number(Hexagram::from_bits(63).unwrap()), 64);
    }
}
