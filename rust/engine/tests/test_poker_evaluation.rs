use felt_engine::cards::{Card, Rank as R, Suit as S};
use felt_engine::poker::{evaluate_hand, showdown, HandRank, PokerOutcome};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_three_of_a_kind() {
    let hand = [
        c(S::Spades, R::Two),
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Two),
        c(S::Clubs, R::Seven),
        c(S::Spades, R::Nine),
    ];
    assert_eq!(evaluate_hand(&hand), HandRank::ThreeOfAKind);
}

#[test]
fn detects_two_pair() {
    let hand = [
        c(S::Spades, R::Three),
        c(S::Hearts, R::Three),
        c(S::Diamonds, R::Eight),
        c(S::Clubs, R::Eight),
        c(S::Spades, R::King),
    ];
    assert_eq!(evaluate_hand(&hand), HandRank::TwoPair);
}

#[test]
fn detects_one_pair() {
    let hand = [
        c(S::Spades, R::Jack),
        c(S::Hearts, R::Jack),
        c(S::Diamonds, R::Two),
        c(S::Clubs, R::Seven),
        c(S::Spades, R::Nine),
    ];
    assert_eq!(evaluate_hand(&hand), HandRank::OnePair);
}

#[test]
fn suited_gaps_rank_as_flush_not_straight() {
    let hand = [
        c(S::Spades, R::Two),
        c(S::Spades, R::Four),
        c(S::Spades, R::Six),
        c(S::Spades, R::Eight),
        c(S::Spades, R::King),
    ];
    assert_eq!(evaluate_hand(&hand), HandRank::Flush);
}

#[test]
fn detects_straight() {
    let hand = [
        c(S::Spades, R::Two),
        c(S::Hearts, R::Three),
        c(S::Diamonds, R::Four),
        c(S::Clubs, R::Five),
        c(S::Spades, R::Six),
    ];
    assert_eq!(evaluate_hand(&hand), HandRank::Straight);
}

#[test]
fn broadway_in_one_suit_is_a_straight_flush() {
    let hand = [
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Ten),
    ];
    assert_eq!(evaluate_hand(&hand), HandRank::StraightFlush);
}

#[test]
fn wheel_is_not_a_straight() {
    // A-2-3-4-5 is deliberately unrecognized: suited it is only a flush,
    // offsuit it is only high card
    let suited = [
        c(S::Clubs, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Clubs, R::Three),
        c(S::Clubs, R::Four),
        c(S::Clubs, R::Five),
    ];
    assert_eq!(evaluate_hand(&suited), HandRank::Flush);

    let offsuit = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Spades, R::Four),
        c(S::Clubs, R::Five),
    ];
    assert_eq!(evaluate_hand(&offsuit), HandRank::HighCard);
}

#[test]
fn detects_full_house() {
    let hand = [
        c(S::Spades, R::King),
        c(S::Hearts, R::King),
        c(S::Diamonds, R::King),
        c(S::Clubs, R::Four),
        c(S::Spades, R::Four),
    ];
    assert_eq!(evaluate_hand(&hand), HandRank::FullHouse);
}

#[test]
fn detects_four_of_a_kind() {
    let hand = [
        c(S::Spades, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Clubs, R::Nine),
        c(S::Spades, R::Ace),
    ];
    assert_eq!(evaluate_hand(&hand), HandRank::FourOfAKind);
}

#[test]
fn detects_high_card() {
    let hand = [
        c(S::Spades, R::Two),
        c(S::Hearts, R::Five),
        c(S::Diamonds, R::Nine),
        c(S::Clubs, R::Jack),
        c(S::Spades, R::King),
    ];
    assert_eq!(evaluate_hand(&hand), HandRank::HighCard);
}

#[test]
fn category_precedence_is_standard() {
    assert!(HandRank::StraightFlush > HandRank::FourOfAKind);
    assert!(HandRank::FourOfAKind > HandRank::FullHouse);
    assert!(HandRank::FullHouse > HandRank::Flush);
    assert!(HandRank::Flush > HandRank::Straight);
    assert!(HandRank::Straight > HandRank::ThreeOfAKind);
    assert!(HandRank::ThreeOfAKind > HandRank::TwoPair);
    assert!(HandRank::TwoPair > HandRank::OnePair);
    assert!(HandRank::OnePair > HandRank::HighCard);
}

#[test]
fn rank_names_match_display_strings() {
    assert_eq!(HandRank::HighCard.name(), "High Card");
    assert_eq!(HandRank::ThreeOfAKind.name(), "Three of a Kind");
    assert_eq!(HandRank::StraightFlush.name(), "Straight Flush");
}

#[test]
fn showdown_ignores_kickers_at_equal_category() {
    assert_eq!(showdown(HandRank::Flush, HandRank::Straight), PokerOutcome::PlayerWin);
    assert_eq!(showdown(HandRank::OnePair, HandRank::TwoPair), PokerOutcome::DealerWin);
    // ace-high pair vs deuce pair is still a tie at category level
    assert_eq!(showdown(HandRank::OnePair, HandRank::OnePair), PokerOutcome::Tie);
}
