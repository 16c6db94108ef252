use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::bankroll::Bankroll;
use crate::cards::{Card, Suit};
use crate::dealer;
use crate::deck::Deck;
use crate::errors::GameError;

/// The nine 5-card draw hand categories, weakest to strongest. Ordinal
/// comparison is the whole ranking: kickers never break a tie within a
/// category, so equal categories settle as a tie outcome.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandRank {
    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Categorize a 5-card hand.
///
/// A straight is five draw values sorted descending with every adjacent pair
/// one apart. The ace only ever counts as 14, so A-2-3-4-5 (the wheel) is
/// NOT a straight here. That matches the house rules this table has always
/// run; suited it still ranks as a flush.
///
/// ```
/// use felt_engine::cards::{Card, Rank, Suit};
/// use felt_engine::poker::{evaluate_hand, HandRank};
///
/// let trips = [
///     Card { suit: Suit::Spades, rank: Rank::Two },
///     Card { suit: Suit::Hearts, rank: Rank::Two },
///     Card { suit: Suit::Diamonds, rank: Rank::Two },
///     Card { suit: Suit::Clubs, rank: Rank::Seven },
///     Card { suit: Suit::Spades, rank: Rank::Nine },
/// ];
/// assert_eq!(evaluate_hand(&trips), HandRank::ThreeOfAKind);
/// ```
pub fn evaluate_hand(cards: &[Card; 5]) -> HandRank {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    let mut values = [0u8; 5];
    for (i, &c) in cards.iter().enumerate() {
        values[i] = c.rank.draw_value();
        rank_counts[values[i] as usize] += 1;
        suit_counts[suit_index(c.suit)] += 1;
    }
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = suit_counts.iter().any(|&n| n == 5);
    let is_straight = values.windows(2).all(|w| w[0] - w[1] == 1);

    // Rank-count multiset sorted descending: [4,1] quads, [3,2] boat, ...
    let mut counts: Vec<u8> = rank_counts.iter().copied().filter(|&n| n > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    if is_flush && is_straight {
        HandRank::StraightFlush
    } else if counts[0] == 4 {
        HandRank::FourOfAKind
    } else if counts[0] == 3 && counts[1] == 2 {
        HandRank::FullHouse
    } else if is_flush {
        HandRank::Flush
    } else if is_straight {
        HandRank::Straight
    } else if counts[0] == 3 {
        HandRank::ThreeOfAKind
    } else if counts[0] == 2 && counts[1] == 2 {
        HandRank::TwoPair
    } else if counts[0] == 2 {
        HandRank::OnePair
    } else {
        HandRank::HighCard
    }
}

/// How a poker round ended at the category-level showdown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PokerOutcome {
    PlayerWin,
    DealerWin,
    Tie,
}

impl PokerOutcome {
    pub fn multiplier(self) -> f64 {
        match self {
            PokerOutcome::PlayerWin => 2.0,
            PokerOutcome::Tie => 1.0,
            PokerOutcome::DealerWin => 0.0,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PokerOutcome::PlayerWin => "You win!",
            PokerOutcome::DealerWin => "Dealer wins.",
            PokerOutcome::Tie => "Tie.",
        }
    }
}

/// Category ordinals only; equal categories tie regardless of kickers.
pub fn showdown(player: HandRank, dealer: HandRank) -> PokerOutcome {
    if player > dealer {
        PokerOutcome::PlayerWin
    } else if player < dealer {
        PokerOutcome::DealerWin
    } else {
        PokerOutcome::Tie
    }
}

/// One 5-card draw round. Hands are fixed-size with in-place replacement;
/// exactly one exchange is permitted, and it settles the round. The dealer's
/// own exchange decisions come from a dedicated RNG stream so a seeded round
/// replays identically.
#[derive(Debug)]
pub struct PokerRound {
    deck: Deck,
    player: [Card; 5],
    dealer: [Card; 5],
    bet: f64,
    settled: bool,
    rng: ChaCha20Rng,
    player_rank: Option<HandRank>,
    dealer_rank: Option<HandRank>,
    outcome: Option<PokerOutcome>,
}

impl PokerRound {
    /// Place the wager and deal five cards each, alternating player/dealer,
    /// from a fresh shuffled deck. A rejected wager deals nothing and debits
    /// nothing.
    pub fn deal(
        bankroll: &mut Bankroll,
        bet: f64,
        deck_seed: u64,
        dealer_seed: u64,
    ) -> Result<Self, GameError> {
        bankroll.validate_bet(bet)?;
        let mut deck = Deck::new_with_seed(deck_seed);
        deck.shuffle();
        let mut player = Vec::with_capacity(5);
        let mut dealer = Vec::with_capacity(5);
        for _ in 0..5 {
            player.push(deck.deal_card()?);
            dealer.push(deck.deal_card()?);
        }
        let player: [Card; 5] = player.try_into().map_err(|_| GameError::EmptyDeck)?;
        let dealer: [Card; 5] = dealer.try_into().map_err(|_| GameError::EmptyDeck)?;
        bankroll.debit(bet)?;
        Ok(Self {
            deck,
            player,
            dealer,
            bet,
            settled: false,
            rng: ChaCha20Rng::seed_from_u64(dealer_seed),
            player_rank: None,
            dealer_rank: None,
            outcome: None,
        })
    }

    /// Replace the selected player cards, let the dealer exchange by house
    /// policy, then evaluate both hands and settle. No-op once settled.
    pub fn exchange(
        &mut self,
        bankroll: &mut Bankroll,
        selection: [bool; 5],
    ) -> Result<(), GameError> {
        if self.settled {
            return Ok(());
        }
        for (i, &swap) in selection.iter().enumerate() {
            if swap {
                self.player[i] = self.deck.deal_card()?;
            }
        }
        let discards = dealer::dealer_discards(&mut self.rng);
        for (i, &swap) in discards.iter().enumerate() {
            if swap {
                self.dealer[i] = self.deck.deal_card()?;
            }
        }

        let player_rank = evaluate_hand(&self.player);
        let dealer_rank = evaluate_hand(&self.dealer);
        let outcome = showdown(player_rank, dealer_rank);
        let payout = self.bet * outcome.multiplier();
        if payout > 0.0 {
            bankroll.credit(payout);
        }
        self.player_rank = Some(player_rank);
        self.dealer_rank = Some(dealer_rank);
        self.outcome = Some(outcome);
        self.settled = true;
        Ok(())
    }

    pub fn player(&self) -> &[Card; 5] {
        &self.player
    }
    pub fn dealer(&self) -> &[Card; 5] {
        &self.dealer
    }
    pub fn bet(&self) -> f64 {
        self.bet
    }
    pub fn is_settled(&self) -> bool {
        self.settled
    }
    pub fn player_rank(&self) -> Option<HandRank> {
        self.player_rank
    }
    pub fn dealer_rank(&self) -> Option<HandRank> {
        self.dealer_rank
    }
    pub fn outcome(&self) -> Option<PokerOutcome> {
        self.outcome
    }
}
