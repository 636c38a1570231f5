//! # haqei-resolver
//!
//! Picks the two strongest trigrams of an affinity vector and resolves their
//! relationship: the directed synergy/conflict narrative (with the primary as
//! the base trigram), a separation-margin confidence and the five-element
//! relation between them.
//!
//! Low confidence marks a blended profile. It is reported on the result, not
//! raised as an error.

pub mod error;
pub mod resolver;

pub use error::ResolveError;
pub use resolver::{InteractionResolver, InteractionResult};
