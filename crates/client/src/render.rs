//! Plain-text rendering of engine results.
use std::fmt::Write;

use pyramid_core::{Deck, Equation, GameState, ResultBuckets, Tile};

/// Deck as a row of labelled tiles, e.g. `A:+5  B:*2  ...`.
pub fn deck(deck: &Deck) -> String {
    deck.iter()
        .map(Tile::to_string)
        .collect::<Vec<_>>()
        .join("  ")
}

/// One line per equation, prefixed with its tile labels.
pub fn equations<'a, I>(equations: I) -> String
where
    I: IntoIterator<Item = &'a Equation>,
{
    let mut out = String::new();
    for equation in equations {
        let [a, b, c] = equation.labels();
        let _ = writeln!(out, "  {a}{b}{c}  {equation}");
    }
    out
}

/// Deck, target, solution count and (optionally) the solutions themselves.
pub fn game_state(state: &GameState, reveal: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tiles:  {}", deck(&state.tiles));
    let _ = writeln!(out, "Target: {}", state.target_number);
    if state.is_unsolvable() {
        let _ = writeln!(out, "No solutions: this round completes immediately.");
        return out;
    }
    let _ = writeln!(out, "Solutions: {}", state.solution_count());
    if reveal {
        out.push_str(&equations(&state.valid_equations));
    }
    out
}

/// Solution count per result, in the order results were first found.
pub fn bucket_summary(buckets: &ResultBuckets) -> String {
    let mut out = String::new();
    for bucket in buckets.iter() {
        let _ = writeln!(out, "  {:>2}: {}", bucket.result, bucket.equations.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyramid_core::{Operator, PuzzleConfig};

    fn sample_deck() -> Deck {
        let faces = [
            "/13", "+7", "*13", "*12", "/4", "-2", "-3", "-4", "+8", "-5",
        ];
        Deck::from_tiles(
            faces
                .iter()
                .enumerate()
                .map(|(position, face)| Tile::parse_at(position, face).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn renders_deck_row() {
        let row = deck(&sample_deck());
        assert!(row.starts_with("A:/13  B:+7  C:*13"));
        assert!(row.ends_with("J:-5"));
    }

    #[test]
    fn hides_solutions_unless_revealed() {
        let state = GameState::for_deck(sample_deck()).unwrap();

        let hidden = game_state(&state, false);
        assert!(hidden.contains("Target: 14"));
        assert!(hidden.contains("Solutions: 3"));
        assert!(!hidden.contains("= 14"));

        let shown = game_state(&state, true);
        assert!(shown.contains("  DIE  12 + 8 / 4 = 14"));
    }

    #[test]
    fn unsolvable_state_is_explained() {
        let state = GameState::unsolvable(sample_deck());
        let text = game_state(&state, true);
        assert!(text.contains("Target: 1"));
        assert!(text.contains("No solutions"));
    }

    #[test]
    fn summary_lists_counts() {
        let tiles = [
            Tile::at(0, Operator::Add, 2),
            Tile::at(1, Operator::Add, 3),
            Tile::at(2, Operator::Add, 4),
        ];
        let buckets = ResultBuckets::from_equations(pyramid_core::enumerate_in_range(
            &tiles,
            PuzzleConfig::TARGET_RESULTS,
        ));
        assert_eq!(bucket_summary(&buckets), "   9: 6\n");
    }
}
