//! Property tests for the relation algebra.

use haqei_algebra::{Hexagram, HexagramAlgebra};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_hexagram() -> impl Strategy<Value = Hexagram> {
    (0u8..64).prop_map(|bits| Hexagram::from_bits(bits).unwrap())
}

fn arb_king_wen() -> impl Strategy<Value = u8> {
    1u8..=64
}

fn arb_line() -> impl Strategy<Value = u8> {
    0u8..6
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn inverse_is_involution(h in arb_hexagram()) {
        prop_assert_eq!(h.inverse().inverse(), h);
    }

    #[test]
    fn complement_is_involution(h in arb_hexagram()) {
        prop_assert_eq!(h.complement().complement(), h);
    }

    #[test]
    fn complement_has_no_fixed_point(h in arb_hexagram()) {
        prop_assert_ne!(h.complement(), h);
    }

    #[test]
    fn mutation_is_involution(h in arb_hexagram(), line in arb_line()) {
        let back = h.mutate(line).unwrap().mutate(line).unwrap();
        prop_assert_eq!(back, h);
    }

    #[test]
    fn mutation_changes_exactly_one_line(h in arb_hexagram(), line in arb_line()) {
        let m = h.mutate(line).unwrap();
        prop_assert_eq!((h.bits() ^ m.bits()).count_ones(), 1);
    }

    #[test]
    fn inverse_and_complement_commute(h in arb_hexagram()) {
        prop_assert_eq!(h.inverse().complement(), h.complement().inverse());
    }

    #[test]
    fn inverse_swaps_and_flips_trigrams(h in arb_hexagram()) {
        let inv = h.inverse();
        // Turning the hexagram over turns each trigram over and swaps them.
        let lower_flipped = Hexagram::from_trigrams(h.lower(), h.lower()).inverse().upper();
        prop_assert_eq!(inv.upper(), lower_flipped);
    }

    #[test]
    fn nuclear_twice_keeps_inner_lines(h in arb_hexagram()) {
        // The nuclear hexagram's own inner lines are lines 3-4 of the original.
        let nn = h.nuclear().nuclear();
        prop_assert_eq!(nn.line(2).unwrap(), h.line(2).unwrap());
        prop_assert_eq!(nn.line(3).unwrap(), h.line(3).unwrap());
    }

    #[test]
    fn nuclear_cycles_with_period_two(h in arb_hexagram()) {
        // Two steps of 互卦 land on 乾, 坤, 既済 or 未済; 既済 and 未済 then alternate.
        let n2 = h.nuclear().nuclear();
        prop_assert_eq!(n2.nuclear().nuclear(), n2);
    }

    #[test]
    fn changing_is_order_independent(h in arb_hexagram(), a in arb_line(), b in arb_line()) {
        prop_assume!(a != b);
        prop_assert_eq!(h.changing(&[a, b]).unwrap(), h.changing(&[b, a]).unwrap());
        prop_assert_eq!(
            h.changing(&[a, b]).unwrap(),
            h.mutate(a).unwrap().mutate(b).unwrap()
        );
    }

    #[test]
    fn king_wen_laws(n in arb_king_wen(), line in arb_line()) {
        let algebra = HexagramAlgebra::default();
        prop_assert_eq!(algebra.inverse(algebra.inverse(n).unwrap()).unwrap(), n);
        prop_assert_eq!(algebra.complement(algebra.complement(n).unwrap()).unwrap(), n);
        prop_assert_ne!(algebra.complement(n).unwrap(), n);
        let m = algebra.line_mutation(n, line).unwrap();
        prop_assert_eq!(algebra.line_mutation(m, line).unwrap(), n);
    }

    #[test]
    fn out_of_range_numbers_fail(n in 65u8..=255) {
        let algebra = HexagramAlgebra::default();
        prop_assert!(algebra.inverse(n).is_err());
        prop_assert!(algebra.nuclear(n).is_err());
    }

    #[test]
    fn out_of_range_lines_fail(n in arb_king_wen(), line in 6u8..=255) {
        let algebra = HexagramAlgebra::default();
        prop_assert!(algebra.line_mutation(n, line).is_err());
    }
}
