//! Integration tests for dartout-core
//!
//! These tests drive the public resolver end to end: range handling, bogey
//! numbers, path invariants and the ranking of well-known checkouts.

use dartout_core::board::{Segment, SegmentKind};
use dartout_core::checkout::{CheckoutPath, enumerate, find_checkouts};
use dartout_core::rule::{DOUBLE_OUT_BOGEYS, FinishingRule};

const ALL_RULES: [FinishingRule; 3] = [
    FinishingRule::DoubleOut,
    FinishingRule::MasterOut,
    FinishingRule::SingleOut,
];

fn labels(paths: &[CheckoutPath]) -> Vec<String> {
    paths.iter().map(CheckoutPath::labels).collect()
}

/// Invariants every returned path must satisfy
mod path_invariant_tests {
    use super::*;

    #[test]
    fn test_double_out_paths_sum_and_finish_on_a_double() {
        for target in 2..=170 {
            for path in find_checkouts(target, FinishingRule::DoubleOut) {
                assert_eq!(path.total(), target as u32, "{} for {}", path, target);
                assert!(
                    matches!(
                        path.last().kind,
                        SegmentKind::Double | SegmentKind::DoubleBull
                    ),
                    "{} for {}",
                    path,
                    target
                );
            }
        }
    }

    #[test]
    fn test_master_out_never_finishes_on_a_single() {
        for target in 1..=180 {
            for path in find_checkouts(target, FinishingRule::MasterOut) {
                assert_eq!(path.total(), target as u32);
                assert_ne!(path.last().kind, SegmentKind::Single);
            }
        }
    }

    #[test]
    fn test_paths_have_one_to_three_throws() {
        for rule in ALL_RULES {
            for target in [1, 2, 41, 99, 121, 160, 170] {
                for path in find_checkouts(target, rule) {
                    assert!((1..=3).contains(&path.total_throws()));
                }
            }
        }
    }

    #[test]
    fn test_paths_are_ranked_by_throw_count() {
        for rule in ALL_RULES {
            let paths = find_checkouts(87, rule);
            assert!(
                paths
                    .windows(2)
                    .all(|w| w[0].total_throws() <= w[1].total_throws())
            );
        }
    }

    #[test]
    fn test_caller_built_paths_are_validated() {
        assert!(CheckoutPath::from_throws(Vec::new()).is_none());
        let off_board = Segment {
            value: 7,
            ..Segment::treble(20)
        };
        assert!(CheckoutPath::from_throws(vec![off_board]).is_none());

        let path = CheckoutPath::from_throws(vec![Segment::double(20)]).unwrap();
        let best = &find_checkouts(40, FinishingRule::DoubleOut)[0];
        assert_eq!(best, &path);
    }

    #[test]
    fn test_no_duplicate_paths() {
        let paths = find_checkouts(57, FinishingRule::SingleOut);
        let unique: std::collections::HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }
}

/// Range checks and unreachable scores
mod range_tests {
    use super::*;

    #[test]
    fn test_zero_and_negative_targets() {
        for rule in ALL_RULES {
            assert!(find_checkouts(0, rule).is_empty());
            assert!(find_checkouts(-1, rule).is_empty());
        }
    }

    #[test]
    fn test_above_max_score() {
        assert!(find_checkouts(171, FinishingRule::DoubleOut).is_empty());
        assert!(find_checkouts(181, FinishingRule::MasterOut).is_empty());
        assert!(find_checkouts(181, FinishingRule::SingleOut).is_empty());
        assert!(!find_checkouts(180, FinishingRule::SingleOut).is_empty());
    }

    #[test]
    fn test_one_under_double_out() {
        assert!(find_checkouts(1, FinishingRule::DoubleOut).is_empty());
        assert_eq!(labels(&find_checkouts(1, FinishingRule::SingleOut)), vec!["1"]);
    }

    #[test]
    fn test_double_out_bogeys() {
        for target in DOUBLE_OUT_BOGEYS {
            assert!(find_checkouts(target as i32, FinishingRule::DoubleOut).is_empty());
        }
    }

    #[test]
    fn test_general_search_agrees_with_bogey_shortcut() {
        for target in DOUBLE_OUT_BOGEYS {
            assert!(
                enumerate(target, FinishingRule::DoubleOut).is_empty(),
                "{} has a double-out checkout",
                target
            );
        }
    }

    #[test]
    fn test_bogeys_are_reachable_under_other_rules() {
        // 159 = T20 T20 T13 with a treble finish
        assert!(!find_checkouts(159, FinishingRule::MasterOut).is_empty());
        assert!(!find_checkouts(162, FinishingRule::SingleOut).is_empty());
    }
}

/// Ranking of well-known checkouts
mod ranking_tests {
    use super::*;

    #[test]
    fn test_determinism() {
        for rule in ALL_RULES {
            for target in [2, 32, 60, 101, 170] {
                assert_eq!(find_checkouts(target, rule), find_checkouts(target, rule));
            }
        }
    }

    #[test]
    fn test_170_double_out() {
        let paths = find_checkouts(170, FinishingRule::DoubleOut);
        assert_eq!(
            paths,
            vec![
                CheckoutPath::from_throws(vec![
                    Segment::treble(20),
                    Segment::treble(20),
                    Segment::double_bull(),
                ])
                .unwrap()
            ]
        );
    }

    #[test]
    fn test_40_double_out() {
        let paths = find_checkouts(40, FinishingRule::DoubleOut);
        assert_eq!(paths[0].throws(), &[Segment::double(20)]);
        assert!(paths[1..].iter().all(|p| p.total_throws() > 1));
        assert_eq!(
            labels(&paths[1..5]),
            vec!["D4 D16", "8 D16", "T8 D8", "D10 D10"]
        );
    }

    #[test]
    fn test_60_single_out_prefers_single_into_bull() {
        let paths = labels(&find_checkouts(60, FinishingRule::SingleOut));
        assert_eq!(paths[0], "T20");
        let single_bull = paths.iter().position(|p| p == "10 BULL").unwrap();
        let double_bull = paths.iter().position(|p| p == "D5 BULL").unwrap();
        assert_eq!(single_bull, 1);
        assert_eq!(double_bull, 2);
    }

    #[test]
    fn test_bull_window_beats_double_sixteen() {
        let paths = labels(&find_checkouts(66, FinishingRule::MasterOut));
        assert_eq!(&paths[..3], &["16 BULL", "D8 BULL", "D17 D16"]);

        let paths = labels(&find_checkouts(66, FinishingRule::DoubleOut));
        assert_eq!(paths[0], "D17 D16");
        let bull = paths.iter().position(|p| p == "16 BULL").unwrap();
        assert!(bull > 0);
    }

    #[test]
    fn test_double_sixteen_leads_equal_length_paths() {
        let paths = find_checkouts(50, FinishingRule::DoubleOut);
        assert_eq!(paths[0].throws(), &[Segment::double_bull()]);
        let two_throw: Vec<&CheckoutPath> =
            paths.iter().filter(|p| p.total_throws() == 2).collect();
        let d16 = two_throw
            .iter()
            .take_while(|p| p.finishes_on_double_sixteen())
            .count();
        assert_eq!(d16, 3);
        assert!(two_throw[d16..].iter().all(|p| !p.finishes_on_double_sixteen()));
    }

    #[test]
    fn test_uniform_paths_sort_first() {
        let paths = labels(&find_checkouts(100, FinishingRule::DoubleOut));
        assert_eq!(&paths[..2], &["T20 D20", "BULL BULL"]);
    }

    #[test]
    fn test_equal_value_singles_rank_by_multiplier() {
        let paths = labels(&find_checkouts(2, FinishingRule::SingleOut));
        assert_eq!(paths, vec!["D1", "2", "1 1"]);
    }
}
