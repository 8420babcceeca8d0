use handrank::cards::{Card, Rank, Suit};
use handrank::ranking::rank_hand;
use proptest::prelude::*;
use std::cmp::Ordering;

prop_compose! {
    fn any_rank()(v in 2u8..=14u8) -> Rank {
        Rank::try_from(v).expect("value in range")
    }
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Hearts), Just(Suit::Diamonds), Just(Suit::Clubs), Just(Suit::Spades),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn straight_cards(top: u8) -> [Card; 5] {
    let ranks: [u8; 5] = if top == 5 {
        [14, 2, 3, 4, 5]
    } else {
        [top - 4, top - 3, top - 2, top - 1, top]
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    let mut cards = [Card::new(Rank::Two, Suit::Clubs); 5];
    for i in 0..5 {
        cards[i] = Card::new(Rank::try_from(ranks[i]).expect("rank in range"), suits[i]);
    }
    cards
}

proptest! {
    #[test]
    fn permutation_invariance(cards in prop::collection::vec(any_card(), 5..=7), rotate in 0usize..7) {
        let base = rank_hand(&cards).expect("enough cards");

        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(rank_hand(&reversed).expect("enough cards"), base);

        let mut rotated = cards.clone();
        rotated.rotate_left(rotate % cards.len());
        prop_assert_eq!(rank_hand(&rotated).expect("enough cards"), base);
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive(
        a in prop::array::uniform5(any_card()),
        b in prop::array::uniform5(any_card()),
        c in prop::array::uniform5(any_card()),
    ) {
        let ra = rank_hand(&a).expect("enough cards");
        let rb = rank_hand(&b).expect("enough cards");
        let rc = rank_hand(&c).expect("enough cards");

        if ra >= rb && rb >= ra { prop_assert_eq!(ra, rb); }
        if ra >= rb && rb >= rc { prop_assert!(ra >= rc); }
    }

    #[test]
    fn raising_the_top_kicker_never_weakens_a_pair_hand(
        pair_rank in 3u8..=14u8,
        kickers in prop::collection::btree_set(2u8..=14u8, 3),
    ) {
        // Fixed pair, three distinct kickers below the pair rank; bump
        // the highest kicker one step and the hand must not get weaker.
        let ks: Vec<u8> = kickers.into_iter().collect();
        prop_assume!(ks.iter().all(|&k| k != pair_rank));
        let top = ks[2];
        prop_assume!(top + 1 <= 14 && top + 1 != pair_rank && !ks.contains(&(top + 1)));

        let build = |top_kicker: u8| -> Vec<Card> {
            vec![
                Card::new(Rank::try_from(pair_rank).unwrap(), Suit::Hearts),
                Card::new(Rank::try_from(pair_rank).unwrap(), Suit::Spades),
                Card::new(Rank::try_from(ks[0]).unwrap(), Suit::Diamonds),
                Card::new(Rank::try_from(ks[1]).unwrap(), Suit::Clubs),
                Card::new(Rank::try_from(top_kicker).unwrap(), Suit::Hearts),
            ]
        };
        let before = rank_hand(&build(top)).expect("enough cards");
        let after = rank_hand(&build(top + 1)).expect("enough cards");
        prop_assert!(after >= before);
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let hi = rank_hand(&straight_cards(top_hi)).expect("enough cards");
        let lo = rank_hand(&straight_cards(top_lo)).expect("enough cards");
        prop_assert!(hi > lo);
    }

    #[test]
    fn wheel_is_the_lowest_straight(top in 6u8..=14u8) {
        let wheel = rank_hand(&straight_cards(5)).expect("enough cards");
        let other = rank_hand(&straight_cards(top)).expect("enough cards");
        prop_assert!(other > wheel);
    }

    #[test]
    fn any_quads_beat_any_full_house(
        quad in 2u8..=14u8,
        kicker in 2u8..=14u8,
        triple in 2u8..=14u8,
        pair in 2u8..=14u8,
    ) {
        prop_assume!(quad != kicker && triple != pair);
        let quads = vec![
            Card::new(Rank::try_from(quad).unwrap(), Suit::Hearts),
            Card::new(Rank::try_from(quad).unwrap(), Suit::Diamonds),
            Card::new(Rank::try_from(quad).unwrap(), Suit::Clubs),
            Card::new(Rank::try_from(quad).unwrap(), Suit::Spades),
            Card::new(Rank::try_from(kicker).unwrap(), Suit::Hearts),
        ];
        let house = vec![
            Card::new(Rank::try_from(triple).unwrap(), Suit::Hearts),
            Card::new(Rank::try_from(triple).unwrap(), Suit::Diamonds),
            Card::new(Rank::try_from(triple).unwrap(), Suit::Clubs),
            Card::new(Rank::try_from(pair).unwrap(), Suit::Spades),
            Card::new(Rank::try_from(pair).unwrap(), Suit::Hearts),
        ];
        let rq = rank_hand(&quads).expect("enough cards");
        let rh = rank_hand(&house).expect("enough cards");
        prop_assert!(rq > rh);
    }

    #[test]
    fn full_house_ordering_is_triple_then_pair(
        t1 in 2u8..=14u8, p1 in 2u8..=14u8,
        t2 in 2u8..=14u8, p2 in 2u8..=14u8,
    ) {
        prop_assume!(t1 != p1 && t2 != p2);
        let build = |t: u8, p: u8| -> Vec<Card> {
            vec![
                Card::new(Rank::try_from(t).unwrap(), Suit::Hearts),
                Card::new(Rank::try_from(t).unwrap(), Suit::Diamonds),
                Card::new(Rank::try_from(t).unwrap(), Suit::Clubs),
                Card::new(Rank::try_from(p).unwrap(), Suit::Spades),
                Card::new(Rank::try_from(p).unwrap(), Suit::Hearts),
            ]
        };
        let a = rank_hand(&build(t1, p1)).expect("enough cards");
        let b = rank_hand(&build(t2, p2)).expect("enough cards");
        match (t1, p1).cmp(&(t2, p2)) {
            Ordering::Greater => prop_assert!(a > b),
            Ordering::Less => prop_assert!(a < b),
            Ordering::Equal => prop_assert_eq!(a, b),
        }
    }
}
