//! # haqei-algebra
//!
//! Hexagram relation algebra. Every relation the corpus tabulates per
//! hexagram is derived here from the 6-bit line pattern:
//!
//! - **綜卦 (inverse)**: bit order reversed; an involution whose 8 fixed
//!   points are the palindromic hexagrams
//! - **錯卦 (complement)**: all six bits flipped; an involution with no
//!   fixed points
//! - **互卦 (nuclear)**: lines 2-4 and 3-5 restacked; not an involution
//! - **爻変 (line mutation)**: one bit flipped
//! - **之卦 (changing lines)**: several bits flipped at once
//!
//! [`Hexagram`] works on bit patterns. [`HexagramAlgebra`] addresses
//! hexagrams by King Wen number through an injectable [`KingWen`] table.

pub mod algebra;
pub mod error;
pub mod hexagram;
pub mod king_wen;

pub use algebra::{HexagramAlgebra, HexagramRelations};
pub use error::AlgebraError;
pub use hexagram::{Hexagram, Line, LINE_COUNT};
pub use king_wen::{KingWen, TRADITIONAL_KING_WEN};
