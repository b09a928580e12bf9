//! Three-tile equation evaluation.
//!
//! An equation reads `a op2 b op3 c`, where `a`, `b`, `c` are the numbers of
//! the first, second and third tile and `op2`, `op3` are the operators of the
//! second and third tile. The first tile's own operator never takes part.
//! `*` and `/` bind tighter than `+` and `-`; operators of equal precedence
//! apply left to right.
//!
//! ## Game-valid evaluation
//! Integer arithmetic. Every division must be exact, and the final value must
//! be a positive integer. Anything else is [`PuzzleConfig::INVALID_RESULT`].
//!
//! ## Raw evaluation
//! Real arithmetic with the same precedence, no validity gate, final value
//! rounded to two decimals. Used to show what an invalid pick "would" equal.

use crate::config::PuzzleConfig;
use crate::tile::{Operator, Tile};

// ============================================================================
// Game-valid Evaluation
// ============================================================================

/// Evaluates three tiles, returning the result or [`PuzzleConfig::INVALID_RESULT`].
pub fn evaluate(tiles: &[Tile; 3]) -> i64 {
    try_evaluate(tiles).unwrap_or(PuzzleConfig::INVALID_RESULT)
}

/// Evaluates three tiles; `None` when the equation has no usable game result.
///
/// The returned value is always strictly positive.
pub fn try_evaluate(tiles: &[Tile; 3]) -> Option<i64> {
    let [first, second, third] = tiles;
    let (a, b, c) = (
        i64::from(first.number),
        i64::from(second.number),
        i64::from(third.number),
    );
    let (op2, op3) = (second.operator, third.operator);

    // only `a + b * c` groups right; every other shape folds left to right
    let value = if op2.is_additive() && op3.is_multiplicative() {
        apply_exact(a, op2, apply_exact(b, op3, c)?)?
    } else {
        apply_exact(apply_exact(a, op2, b)?, op3, c)?
    };

    (value > 0).then_some(value)
}

/// Applies one integer operation. Inexact division and overflow yield `None`.
fn apply_exact(lhs: i64, operator: Operator, rhs: i64) -> Option<i64> {
    match operator {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Subtract => lhs.checked_sub(rhs),
        Operator::Multiply => lhs.checked_mul(rhs),
        Operator::Divide => {
            if lhs.checked_rem(rhs)? != 0 {
                return None;
            }
            lhs.checked_div(rhs)
        }
    }
}

// ============================================================================
// Raw Evaluation
// ============================================================================

/// Evaluates three tiles with real division and no validity gate, rounded to
/// two decimals.
pub fn evaluate_raw(tiles: &[Tile; 3]) -> f64 {
    let [first, second, third] = tiles;
    let (a, b, c) = (
        f64::from(first.number),
        f64::from(second.number),
        f64::from(third.number),
    );
    let (op2, op3) = (second.operator, third.operator);

    let value = if op2.is_additive() && op3.is_multiplicative() {
        apply_real(a, op2, apply_real(b, op3, c))
    } else {
        apply_real(apply_real(a, op2, b), op3, c)
    };

    round_to_cents(value)
}

fn apply_real(lhs: f64, operator: Operator, rhs: f64) -> f64 {
    match operator {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => lhs / rhs,
    }
}

/// Rounds to two decimals; ties round toward positive infinity.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID: i64 = PuzzleConfig::INVALID_RESULT;

    fn triple(faces: [(Operator, u32); 3]) -> [Tile; 3] {
        let [x, y, z] = faces;
        [
            Tile::at(0, x.0, x.1),
            Tile::at(1, y.0, y.1),
            Tile::at(2, z.0, z.1),
        ]
    }

    use Operator::{Add, Divide, Multiply, Subtract};

    #[test]
    fn plain_addition() {
        let tiles = triple([(Add, 5), (Add, 3), (Add, 2)]);
        assert_eq!(evaluate(&tiles), 10);
        assert_eq!(evaluate_raw(&tiles), 10.0);
    }

    #[test]
    fn subtraction_then_addition_runs_left_to_right() {
        // 15 - 9 + 9, not 15 - (9 + 9)
        let tiles = triple([(Add, 15), (Subtract, 9), (Add, 9)]);
        assert_eq!(evaluate(&tiles), 15);
    }

    #[test]
    fn negative_intermediate_is_allowed() {
        // 3 - 9 + 10 = 4
        let tiles = triple([(Add, 3), (Subtract, 9), (Add, 10)]);
        assert_eq!(evaluate(&tiles), 4);
    }

    #[test]
    fn inexact_division_is_invalid_but_raw_is_fractional() {
        let tiles = triple([(Add, 10), (Divide, 3), (Add, 2)]);
        assert_eq!(evaluate(&tiles), INVALID);
        assert_eq!(try_evaluate(&tiles), None);
        assert_eq!(evaluate_raw(&tiles), 5.33);
    }

    #[test]
    fn trailing_multiplication_binds_tighter() {
        // 5 + (3 * 2)
        let tiles = triple([(Add, 5), (Add, 3), (Multiply, 2)]);
        assert_eq!(evaluate(&tiles), 11);
        assert_eq!(evaluate_raw(&tiles), 11.0);
    }

    #[test]
    fn chained_division_short_circuits() {
        // 20 / 2 = 10, then 10 / 3 is not whole
        let tiles = triple([(Add, 20), (Divide, 2), (Divide, 3)]);
        assert_eq!(evaluate(&tiles), INVALID);
        assert_eq!(evaluate_raw(&tiles), 3.33);
    }

    #[test]
    fn leading_multiplicative_then_additive() {
        // (6 / 2) - 1 = 2
        let tiles = triple([(Add, 6), (Divide, 2), (Subtract, 1)]);
        assert_eq!(evaluate(&tiles), 2);

        // (4 * 3) - 12 = 0 fails the positivity gate
        let zero = triple([(Add, 4), (Multiply, 3), (Subtract, 12)]);
        assert_eq!(evaluate(&zero), INVALID);
        assert_eq!(evaluate_raw(&zero), 0.0);
    }

    #[test]
    fn trailing_division_checks_sub_expression() {
        // 2 + (12 / 4) = 5
        let exact = triple([(Add, 2), (Add, 12), (Divide, 4)]);
        assert_eq!(evaluate(&exact), 5);

        // 5 + (7 / 2): 7 is not divisible by 2
        let inexact = triple([(Add, 5), (Add, 7), (Divide, 2)]);
        assert_eq!(evaluate(&inexact), INVALID);
        assert_eq!(evaluate_raw(&inexact), 8.5);
    }

    #[test]
    fn negative_results_are_invalid_but_raw_keeps_sign() {
        // 2 - (3 * 4) = -10
        let tiles = triple([(Add, 2), (Subtract, 3), (Multiply, 4)]);
        assert_eq!(evaluate(&tiles), INVALID);
        assert_eq!(evaluate_raw(&tiles), -10.0);
    }

    #[test]
    fn first_operator_is_ignored() {
        let expected = evaluate(&triple([(Add, 8), (Divide, 2), (Add, 1)]));
        assert_eq!(expected, 5);
        for operator in Operator::ALL {
            let tiles = triple([(operator, 8), (Divide, 2), (Add, 1)]);
            assert_eq!(evaluate(&tiles), expected);
            assert_eq!(evaluate_raw(&tiles), 5.0);
        }
    }

    #[test]
    fn division_by_zero_is_invalid() {
        let tiles = triple([(Add, 8), (Divide, 0), (Add, 1)]);
        assert_eq!(evaluate(&tiles), INVALID);
        assert!(evaluate_raw(&tiles).is_infinite());
    }

    #[test]
    fn overflow_is_invalid() {
        let tiles = triple([(Add, u32::MAX), (Multiply, u32::MAX), (Multiply, u32::MAX)]);
        assert_eq!(evaluate(&tiles), INVALID);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let tiles = triple([(Add, 9), (Multiply, 2), (Subtract, 4)]);
        let first = evaluate(&tiles);
        for _ in 0..10 {
            assert_eq!(evaluate(&tiles), first);
        }
        assert_eq!(first, 14);
    }

    #[test]
    fn raw_rounding_is_half_up() {
        assert_eq!(round_to_cents(2.0 / 3.0), 0.67);
        assert_eq!(round_to_cents(-2.0 / 3.0), -0.67);
        assert_eq!(round_to_cents(1.0 / 8.0), 0.13);
    }
}
