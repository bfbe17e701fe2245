//! Property tests over random deals.
//! Generators always draw without replacement from one deck.

use proptest::prelude::*;
use shisanshui::{Arrangement, Card, Category, Grouping, Hand, Player, Points, Position};
use shisanshui::{BODY_SIZE, FOUL_PENALTY, HAND_SIZE, HEAD_SIZE};
use shisanshui::{Options, Stakes};
use shisanshui::{classify, compare_groupings, detect_special_pattern, score, search};
use std::cmp::Ordering;

mod gens {
    use super::*;

    /// N distinct cards from one shuffled deck.
    pub fn deal(n: usize) -> impl Strategy<Value = Vec<Card>> {
        Just((0..52u8).collect::<Vec<u8>>())
            .prop_shuffle()
            .prop_map(move |deck| deck.into_iter().take(n).map(Card::from).collect())
    }

    /// A 3- or 5-card grouping.
    pub fn grouping() -> impl Strategy<Value = Vec<Card>> {
        prop_oneof![deal(HEAD_SIZE), deal(BODY_SIZE)]
    }

    /// Two disjoint groupings of the same size.
    pub fn rivals(size: usize) -> impl Strategy<Value = (Grouping, Grouping)> {
        deal(size * 2).prop_map(move |cards| {
            let a = Grouping::try_from(&cards[..size]).unwrap();
            let b = Grouping::try_from(&cards[size..]).unwrap();
            (a, b)
        })
    }

    /// Seats dealt from one deck, 2 to 4 players.
    pub fn table() -> impl Strategy<Value = Vec<Vec<Card>>> {
        (2usize..=4).prop_flat_map(|players| {
            deal(players * HAND_SIZE).prop_map(|cards| {
                cards
                    .chunks_exact(HAND_SIZE)
                    .map(|seat| seat.to_vec())
                    .collect()
            })
        })
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Classification is total, deterministic and ignores card order.
    #[test]
    fn classify_is_deterministic(cards in gens::grouping()) {
        let once = classify(&cards).unwrap();
        let twice = classify(&cards).unwrap();
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once, classify(&reversed).unwrap());
        prop_assert!(Category::reachable(cards.len()).contains(&once.category()));
    }

    /// Swapping the arguments reverses the ordering.
    #[test]
    fn compare_is_antisymmetric(
        (a, b) in gens::rivals(BODY_SIZE),
        (c, d) in gens::rivals(HEAD_SIZE),
    ) {
        for position in [Position::Middle, Position::Tail] {
            let ab = compare_groupings(&a, &b, position).unwrap();
            let ba = compare_groupings(&b, &a, position).unwrap();
            prop_assert_eq!(ab, ba.reverse());
        }
        let cd = compare_groupings(&c, &d, Position::Head).unwrap();
        let dc = compare_groupings(&d, &c, Position::Head).unwrap();
        prop_assert_eq!(cd, dc.reverse());
    }

    /// A sorted sample stays sorted under every pairwise check.
    #[test]
    fn compare_is_transitive(hands in prop::collection::vec(gens::deal(BODY_SIZE), 2..12)) {
        let mut groupings = hands
            .iter()
            .map(|cards| Grouping::try_from(cards.as_slice()).unwrap())
            .collect::<Vec<Grouping>>();
        groupings.sort_by(|a, b| compare_groupings(a, b, Position::Tail).unwrap());
        for i in 0..groupings.len() {
            for j in (i + 1)..groupings.len() {
                let order = compare_groupings(&groupings[i], &groupings[j], Position::Tail).unwrap();
                prop_assert!(order != Ordering::Greater);
            }
        }
    }

    /// The fallback split is always legal and uses every card.
    #[test]
    fn fallback_never_fouls(cards in gens::deal(HAND_SIZE)) {
        let hand = Hand::dealt(&cards).unwrap();
        let fallback = Arrangement::fallback(hand).unwrap();
        prop_assert!(!fallback.is_foul(), "{}", fallback);
        prop_assert_eq!(fallback.hand(), hand);
    }

    /// Special layouts are legal.
    #[test]
    fn special_patterns_never_foul(cards in gens::deal(HAND_SIZE)) {
        if let Some(special) = detect_special_pattern(&cards).unwrap() {
            prop_assert!(!special.is_foul(), "{}", special);
            prop_assert!(special.pattern().is_some());
            prop_assert_eq!(special.hand(), Hand::dealt(&cards).unwrap());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Search returns legal arrangements that partition the input exactly.
    #[test]
    fn search_never_fouls(cards in gens::deal(HAND_SIZE)) {
        let found = search(&cards, &Options::default()).unwrap();
        prop_assert!(!found.is_empty());
        for arrangement in found {
            prop_assert!(!arrangement.is_foul(), "{}", arrangement);
            let mut used = arrangement.head().cards();
            used.extend(arrangement.middle().cards());
            used.extend(arrangement.tail().cards());
            prop_assert_eq!(used.len(), HAND_SIZE);
            prop_assert_eq!(Hand::distinct(&used).unwrap(), Hand::dealt(&cards).unwrap());
        }
    }

    /// Without special bonuses a round nets to zero.
    #[test]
    fn scoring_is_zero_sum(seats in gens::table()) {
        let players = seats
            .iter()
            .map(|cards| search(cards, &Options::default().with_results(1)).unwrap()[0])
            .map(Player::from)
            .collect::<Vec<Player>>();
        for stakes in [Stakes::default(), Stakes::classic().with_base(3)] {
            let points = score(&players, &stakes.with_specials(false)).unwrap();
            prop_assert_eq!(points.iter().sum::<Points>(), 0);
        }
    }

    /// Fouled seats pay everyone who did not foul, whatever they hold.
    #[test]
    fn fouls_pay_the_penalty(seats in gens::table()) {
        let players = seats
            .iter()
            .map(|cards| Hand::dealt(cards).unwrap())
            .map(|hand| Arrangement::ranked(hand).unwrap())
            .map(Player::from)
            .collect::<Vec<Player>>();
        let stakes = Stakes::default().with_specials(false);
        let points = score(&players, &stakes).unwrap();
        for (seat, player) in players.iter().enumerate() {
            if player.is_foul() {
                let legal = players.iter().filter(|p| !p.is_foul()).count() as Points;
                prop_assert_eq!(points[seat], -legal * FOUL_PENALTY);
            }
        }
    }
}
