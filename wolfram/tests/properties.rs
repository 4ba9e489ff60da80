//! Property tests for rule evaluation, stepping and the scrolling grid.

use proptest::prelude::*;
use wolfram::{Cell, Rule, ScrollGrid, next_bit, step};

fn row(max_len: usize) -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(0u8..=1, 1..=max_len)
}

// =============================================================================
// Rule engine
// =============================================================================

proptest! {
    /// Every neighbourhood picks bit 4l + 2c + r of the rule.
    #[test]
    fn prop_next_bit_is_rule_bit(rule in any::<u8>(), l in 0u8..=1, c in 0u8..=1, r in 0u8..=1) {
        prop_assert_eq!(next_bit(l, c, r, rule), (rule >> (4 * l + 2 * c + r)) & 1);
    }
}

// =============================================================================
// Stepper
// =============================================================================

proptest! {
    #[test]
    fn prop_rule_0_kills_all(mut cells in row(64)) {
        step(&mut cells, Rule::new(0));
        prop_assert!(cells.iter().all(|&c| c == 0));
    }

    #[test]
    fn prop_rule_255_fills_all(mut cells in row(64)) {
        step(&mut cells, Rule::new(255));
        prop_assert!(cells.iter().all(|&c| c == 1));
    }

    /// 204 = 0b1100_1100 keeps every center bit.
    #[test]
    fn prop_rule_204_is_identity(cells in row(64)) {
        let mut stepped = cells.clone();
        step(&mut stepped, Rule::new(204));
        prop_assert_eq!(stepped, cells);
    }

    /// 51 = 0b0011_0011 flips every center bit, so two steps return home.
    #[test]
    fn prop_rule_51_twice_is_identity(cells in row(64)) {
        let mut stepped = cells.clone();
        step(&mut stepped, Rule::new(51));
        prop_assert!(stepped.iter().zip(&cells).all(|(a, b)| a != b));
        step(&mut stepped, Rule::new(51));
        prop_assert_eq!(stepped, cells);
    }

    /// Rotating the row commutes with stepping on a torus.
    #[test]
    fn prop_step_commutes_with_rotation(rule in any::<u8>(), cells in row(64), shift in 0usize..64) {
        let shift = shift % cells.len();

        let mut rotated_then_stepped = cells.clone();
        rotated_then_stepped.rotate_left(shift);
        step(&mut rotated_then_stepped, Rule::new(rule));

        let mut stepped_then_rotated = cells;
        step(&mut stepped_then_rotated, Rule::new(rule));
        stepped_then_rotated.rotate_left(shift);

        prop_assert_eq!(rotated_then_stepped, stepped_then_rotated);
    }
}

// =============================================================================
// Scrolling grid
// =============================================================================

proptest! {
    /// After any number of records the grid shows the last min(n, width)
    /// rows, oldest first.
    #[test]
    fn prop_grid_shows_latest_rows(width in 1usize..12, count in 0usize..40) {
        let mut grid = ScrollGrid::new(12, width);
        let history: Vec<Vec<Cell>> = (0..count)
            .map(|n| (0..width).map(|bit| ((n >> (bit % 8)) & 1) as Cell).collect())
            .collect();
        for line in &history {
            grid.record(line);
        }

        let shown: Vec<Vec<Cell>> = grid.visible_rows().map(<[Cell]>::to_vec).collect();
        let expected = &history[count.saturating_sub(width)..];
        prop_assert_eq!(shown.as_slice(), expected);
    }
}
