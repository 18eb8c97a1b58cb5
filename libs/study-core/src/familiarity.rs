//! Familiarity tier transitions.
//!
//! A single pure function maps (current tier, correctness, answer time) to
//! the next tier. Promotions from the upper tiers additionally require a
//! fast answer: under 10 seconds to reach `Familiar`, under 5 seconds to
//! reach `Mastered`. Demotions step down one tier at most, and `Unfamiliar`
//! is the floor.

use crate::types::Familiarity;

/// Seconds under which an answer still counts as fast enough to reach
/// `Familiar` from `SomewhatFamiliar`.
pub const FAMILIAR_THRESHOLD_SECS: f64 = 10.0;

/// Seconds under which an answer still counts as fast enough to reach
/// `Mastered` from `Familiar`.
pub const MASTERED_THRESHOLD_SECS: f64 = 5.0;

/// Next familiarity tier after one answer. Total over all inputs.
pub fn next_familiarity(current: Familiarity, is_correct: bool, time_spent_secs: f64) -> Familiarity {
    use Familiarity::*;

    if !is_correct {
        return match current {
            Unfamiliar | Unanswered | SomewhatFamiliar => Unfamiliar,
            Familiar => SomewhatFamiliar,
            Mastered => Familiar,
        };
    }

    match current {
        Unfamiliar | Unanswered => SomewhatFamiliar,
        SomewhatFamiliar if time_spent_secs < FAMILIAR_THRESHOLD_SECS => Familiar,
        SomewhatFamiliar => SomewhatFamiliar,
        Familiar if time_spent_secs < MASTERED_THRESHOLD_SECS => Mastered,
        Familiar => Familiar,
        Mastered => Mastered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_TIERS: [Familiarity; 5] = [
        Familiarity::Unfamiliar,
        Familiarity::Unanswered,
        Familiarity::SomewhatFamiliar,
        Familiarity::Familiar,
        Familiarity::Mastered,
    ];

    fn rank(tier: Familiarity) -> u8 {
        match tier {
            Familiarity::Unfamiliar | Familiarity::Unanswered => 0,
            Familiarity::SomewhatFamiliar => 1,
            Familiarity::Familiar => 2,
            Familiarity::Mastered => 3,
        }
    }

    #[test]
    fn first_correct_answer_moves_to_somewhat_familiar() {
        assert_eq!(
            next_familiarity(Familiarity::Unanswered, true, 3.0),
            Familiarity::SomewhatFamiliar
        );
        assert_eq!(
            next_familiarity(Familiarity::Unfamiliar, true, 30.0),
            Familiarity::SomewhatFamiliar
        );
    }

    #[test]
    fn fast_answers_promote_through_upper_tiers() {
        assert_eq!(
            next_familiarity(Familiarity::SomewhatFamiliar, true, 9.9),
            Familiarity::Familiar
        );
        assert_eq!(
            next_familiarity(Familiarity::Familiar, true, 4.9),
            Familiarity::Mastered
        );
    }

    #[test]
    fn slow_correct_answers_hold_the_tier() {
        assert_eq!(
            next_familiarity(Familiarity::SomewhatFamiliar, true, 10.0),
            Familiarity::SomewhatFamiliar
        );
        assert_eq!(
            next_familiarity(Familiarity::Familiar, true, 5.0),
            Familiarity::Familiar
        );
        assert_eq!(
            next_familiarity(Familiarity::Familiar, true, 12.0),
            Familiarity::Familiar
        );
    }

    #[test]
    fn mastered_is_a_ceiling() {
        for secs in [0.0, 4.0, 7.0, 60.0] {
            assert_eq!(
                next_familiarity(Familiarity::Mastered, true, secs),
                Familiarity::Mastered
            );
        }
    }

    #[test]
    fn incorrect_answers_step_down_one_tier() {
        assert_eq!(
            next_familiarity(Familiarity::Mastered, false, 1.0),
            Familiarity::Familiar
        );
        assert_eq!(
            next_familiarity(Familiarity::Familiar, false, 1.0),
            Familiarity::SomewhatFamiliar
        );
        assert_eq!(
            next_familiarity(Familiarity::SomewhatFamiliar, false, 1.0),
            Familiarity::Unfamiliar
        );
        assert_eq!(
            next_familiarity(Familiarity::Unanswered, false, 1.0),
            Familiarity::Unfamiliar
        );
    }

    #[test]
    fn incorrect_never_promotes_any_tier() {
        for tier in ALL_TIERS {
            for secs in [0.0, 4.9, 9.9, 20.0] {
                let next = next_familiarity(tier, false, secs);
                assert!(
                    rank(next) <= rank(tier),
                    "{:?} promoted to {:?} on a wrong answer",
                    tier,
                    next
                );
            }
        }
    }

    #[test]
    fn unfamiliar_is_a_fixed_point_under_repeated_failures() {
        let mut tier = Familiarity::Unfamiliar;
        for _ in 0..10 {
            tier = next_familiarity(tier, false, 2.0);
            assert_eq!(tier, Familiarity::Unfamiliar);
        }
    }

    #[test]
    fn slow_correct_answers_never_skip_a_tier() {
        for tier in ALL_TIERS {
            let next = next_familiarity(tier, true, 10.0);
            assert!(
                rank(next) <= rank(tier) + 1,
                "{:?} skipped to {:?}",
                tier,
                next
            );
        }
    }
}
