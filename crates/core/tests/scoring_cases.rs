use termjack_core::{calculate_score, Hand, Rank};

macro_rules! score_case {
    ($name:ident, [$($card:expr),*], $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(calculate_score(&[$($card),*]), $expected);
        }
    };
}

score_case!(empty_hand_scores_zero, [], 0);
score_case!(ace_counts_high_when_it_fits, [11, 6], 17);
score_case!(two_aces_reduce_one, [11, 11, 9], 21);
score_case!(no_ace_no_reduction, [10, 9, 5], 24);
score_case!(three_aces_reduce_all, [11, 11, 11, 9], 12);
score_case!(pair_of_aces, [11, 11], 12);
score_case!(natural_twenty_one, [11, 10], 21);
score_case!(ace_drops_to_one_after_hit, [11, 5, 10], 16);
score_case!(four_aces_and_a_seven, [11, 11, 11, 11, 7], 21);
score_case!(aces_exhausted_still_bust, [11, 10, 10, 5], 26);

#[test]
fn single_card_scores_its_value() {
    for rank in Rank::ALL {
        assert_eq!(calculate_score(&[rank.value()]), u32::from(rank.value()));
    }
}

#[test]
fn every_two_card_hand_is_at_most_twenty_one() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            let hand = Hand::from_cards(vec![a.value(), b.value()]);
            assert!(hand.score() <= 21, "{hand:?}");
            assert!(hand.score() >= 4);
        }
    }
}
