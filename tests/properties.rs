//! Property tests for the enumerator and ranking operations.

use proptest::prelude::*;
use u_coinage::coins::{
    enumerate_combinations, Backtracking, ClosedForm, CoinEnumerator, Denominations,
};
use u_coinage::ranking::{lowest_scoring, rank_descending};

fn roster() -> impl Strategy<Value = (Vec<String>, Vec<i64>)> {
    prop::collection::vec(("[a-z]{1,6}", 0i64..=100), 1..40)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

proptest! {
    #[test]
    fn count_is_amount_over_five_plus_one(amount in 0i64..5_000) {
        let (count, combos) = enumerate_combinations(amount).unwrap();
        prop_assert_eq!(count, (amount / 5 + 1) as usize);
        prop_assert_eq!(combos.len(), count);
    }

    #[test]
    fn every_combination_sums_to_amount(amount in 0i64..5_000) {
        let (_, combos) = enumerate_combinations(amount).unwrap();
        for (k, c) in combos.iter().enumerate() {
            prop_assert_eq!(c.pennies + 5 * c.nickels, amount as u64);
            prop_assert_eq!(c.nickels, k as u64);
        }
    }

    #[test]
    fn negative_amounts_are_rejected(amount in i64::MIN..0) {
        prop_assert!(enumerate_combinations(amount).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn strategies_agree_on_two_coins(amount in 0u64..400, small in 1u64..6, gap in 1u64..20) {
        let coins = Denominations::new(&[small, small + gap]).unwrap();
        let closed = ClosedForm::default().enumerate(amount, &coins).unwrap();
        let searched = Backtracking::default().enumerate(amount, &coins).unwrap();
        prop_assert_eq!(closed, searched);
    }

    #[test]
    fn backtracking_results_are_exact(amount in 0u64..120) {
        let coins = Denominations::new(&[1, 2, 5, 10, 25]).unwrap();
        for d in Backtracking::default().enumerate(amount, &coins).unwrap() {
            prop_assert_eq!(d.value(), amount);
        }
    }

    #[test]
    fn lowest_scoring_is_first_minimum((names, scores) in roster()) {
        let min = *scores.iter().min().unwrap();
        let first = scores.iter().position(|&s| s == min).unwrap();
        prop_assert_eq!(lowest_scoring(&names, &scores).unwrap(), names[first].as_str());
    }

    #[test]
    fn rank_descending_is_stable_permutation((names, scores) in roster()) {
        let (ranked_names, ranked_scores) = rank_descending(&names, &scores).unwrap();
        prop_assert_eq!(ranked_scores.len(), scores.len());
        prop_assert!(ranked_scores.windows(2).all(|w| w[0] >= w[1]));

        let mut expected: Vec<(usize, &String, i64)> = names
            .iter()
            .zip(scores.iter().copied())
            .enumerate()
            .map(|(i, (n, s))| (i, n, s))
            .collect();
        expected.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
        let expected_names: Vec<&String> = expected.iter().map(|e| e.1).collect();
        let actual_names: Vec<&String> = ranked_names.iter().collect();
        prop_assert_eq!(actual_names, expected_names);
    }

    #[test]
    fn mismatched_lengths_are_rejected((names, scores) in roster(), extra in 0i64..100) {
        let mut longer = scores.clone();
        longer.push(extra);
        prop_assert!(lowest_scoring(&names, &longer).unwrap_err().is_invalid_argument());
        prop_assert!(rank_descending(&names, &longer).unwrap_err().is_invalid_argument());
    }
}
