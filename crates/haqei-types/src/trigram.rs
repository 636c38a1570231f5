use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::TypesError;

/// One of the eight trigrams (八卦).
///
/// Discriminants follow the corpus numbering (乾1 兌2 離3 震4 巽5 坎6 艮7 坤8),
/// which is the key space of every weight table and of the interaction table.
/// The line pattern is a separate 3-bit value with bit 0 as the bottom line
/// and 1 meaning yang.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Trigram {
    /// 乾 ☰ heaven
    Qian = 1,
    /// 兌 ☱ lake
    Dui = 2,
    /// 離 ☲ fire
    Li = 3,
    /// 震 ☳ thunder
    Zhen = 4,
    /// 巽 ☴ wind
    Xun = 5,
    /// 坎 ☵ water
    Kan = 6,
    /// 艮 ☶ mountain
    Gen = 7,
    /// 坤 ☷ earth
    Kun = 8,
}

impl Trigram {
    /// All trigrams in id order.
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    /// Corpus id, 1–8.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based slot used by fixed-size vectors.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn from_id(id: u8) -> Result<Self, TypesError> {
        match id {
            1..=8 => Ok(Self::ALL[id as usize - 1]),
            other => Err(TypesError::InvalidTrigramId(other)),
        }
    }

    /// Line pattern, bottom line in bit 0.
    pub fn bits(self) -> u8 {
        match self {
            Trigram::Qian => 0b111,
            Trigram::Dui => 0b011,
            Trigram::Li => 0b101,
            Trigram::Zhen => 0b001,
            Trigram::Xun => 0b110,
            Trigram::Kan => 0b010,
            Trigram::Gen => 0b100,
            Trigram::Kun => 0b000,
        }
    }

    pub fn from_bits(bits: u8) -> Result<Self, TypesError> {
        if bits > 0b111 {
            return Err(TypesError::InvalidTrigramBits(bits));
        }
        Ok(Self::from_low_bits(bits))
    }

    /// Trigram formed by the three lowest bits; higher bits are ignored.
    pub fn from_low_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b111 => Trigram::Qian,
            0b011 => Trigram::Dui,
            0b101 => Trigram::Li,
            0b001 => Trigram::Zhen,
            0b110 => Trigram::Xun,
            0b010 => Trigram::Kan,
            0b100 => Trigram::Gen,
            _ => Trigram::Kun,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Dui => "兌",
            Trigram::Li => "離",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Trigram::Qian => '☰',
            Trigram::Dui => '☱',
            Trigram::Li => '☲',
            Trigram::Zhen => '☳',
            Trigram::Xun => '☴',
            Trigram::Kan => '☵',
            Trigram::Gen => '☶',
            Trigram::Kun => '☷',
        }
    }

    /// Traditional five-element assignment.
    pub fn element(self) -> Element {
        match self {
            Trigram::Qian | Trigram::Dui => Element::Metal,
            Trigram::Li => Element::Fire,
            Trigram::Zhen | Trigram::Xun => Element::Wood,
            Trigram::Kan => Element::Water,
            Trigram::Gen | Trigram::Kun => Element::Earth,
        }
    }
}

impl From<Trigram> for u8 {
    fn from(trigram: Trigram) -> u8 {
        trigram.id()
    }
}

impl TryFrom<u8> for Trigram {
    type Error = TypesError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Trigram::from_id(id)
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.symbol(), self.name())
    }
}
