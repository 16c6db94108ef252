use serde::{Deserialize, Serialize};

use crate::bankroll::Bankroll;
use crate::cards::Card;
use crate::dealer;
use crate::deck::Deck;
use crate::errors::GameError;

/// Blackjack total for a hand. Every ace starts at 11; while the running
/// total exceeds 21 and an ace still counted as 11 remains, one is dropped
/// to 1. This yields the best total not exceeding 21 when one exists:
/// {A, A, 9} scores 21 (one ace high, one low), not 19 or 31.
pub fn hand_total(cards: &[Card]) -> u8 {
    let mut total = 0u8;
    let mut aces = 0u8;
    for card in cards {
        let v = card.rank.blackjack_value();
        if v == 11 {
            aces += 1;
        }
        total += v;
    }
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    total
}

/// How a blackjack round ended. Bust is the player busting on a hit;
/// the other three come from the showdown after `stand`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BlackjackOutcome {
    PlayerWin,
    DealerWin,
    Push,
    Bust,
}

impl BlackjackOutcome {
    /// Payout multiplier applied to the debited stake: a win returns the
    /// stake plus equal winnings, a push returns the stake, a loss nothing.
    pub fn multiplier(self) -> f64 {
        match self {
            BlackjackOutcome::PlayerWin => 2.0,
            BlackjackOutcome::Push => 1.0,
            BlackjackOutcome::DealerWin | BlackjackOutcome::Bust => 0.0,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BlackjackOutcome::PlayerWin => "You win!",
            BlackjackOutcome::DealerWin => "Dealer wins.",
            BlackjackOutcome::Push => "Push.",
            BlackjackOutcome::Bust => "Bust! Dealer wins.",
        }
    }
}

/// Compare final totals once the dealer has finished drawing.
pub fn showdown(player: u8, dealer: u8) -> BlackjackOutcome {
    if dealer > 21 || player > dealer {
        BlackjackOutcome::PlayerWin
    } else if player < dealer {
        BlackjackOutcome::DealerWin
    } else {
        BlackjackOutcome::Push
    }
}

/// One blackjack round: its own deck, both hands, and the live stake.
/// Dealt by [`deal`](BlackjackRound::deal), advanced by `hit`/`stand`,
/// settled exactly once. Settled rounds ignore further `hit`/`stand` calls.
#[derive(Debug)]
pub struct BlackjackRound {
    deck: Deck,
    player: Vec<Card>,
    dealer: Vec<Card>,
    bet: f64,
    settled: bool,
    outcome: Option<BlackjackOutcome>,
}

impl BlackjackRound {
    /// Place the wager and deal two cards each from a fresh shuffled deck.
    /// A rejected wager deals nothing and debits nothing.
    pub fn deal(bankroll: &mut Bankroll, bet: f64, seed: u64) -> Result<Self, GameError> {
        bankroll.validate_bet(bet)?;
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let player = vec![deck.deal_card()?, deck.deal_card()?];
        let dealer = vec![deck.deal_card()?, deck.deal_card()?];
        bankroll.debit(bet)?;
        Ok(Self {
            deck,
            player,
            dealer,
            bet,
            settled: false,
            outcome: None,
        })
    }

    /// Draw one card into the player hand. Going over 21 settles the round
    /// immediately as a bust. No-op once settled.
    pub fn hit(&mut self, bankroll: &mut Bankroll) -> Result<(), GameError> {
        if self.settled {
            return Ok(());
        }
        let card = self.deck.deal_card()?;
        self.player.push(card);
        if hand_total(&self.player) > 21 {
            self.finish(bankroll, BlackjackOutcome::Bust);
        }
        Ok(())
    }

    /// Dealer draws to the house policy, then the round settles on the
    /// showdown. No-op once settled.
    pub fn stand(&mut self, bankroll: &mut Bankroll) -> Result<(), GameError> {
        if self.settled {
            return Ok(());
        }
        while dealer::dealer_hits(hand_total(&self.dealer)) {
            let card = self.deck.deal_card()?;
            self.dealer.push(card);
        }
        let outcome = showdown(hand_total(&self.player), hand_total(&self.dealer));
        self.finish(bankroll, outcome);
        Ok(())
    }

    fn finish(&mut self, bankroll: &mut Bankroll, outcome: BlackjackOutcome) {
        let payout = self.bet * outcome.multiplier();
        if payout > 0.0 {
            bankroll.credit(payout);
        }
        self.settled = true;
        self.outcome = Some(outcome);
    }

    pub fn player(&self) -> &[Card] {
        &self.player
    }
    pub fn dealer(&self) -> &[Card] {
        &self.dealer
    }
    pub fn player_total(&self) -> u8 {
        hand_total(&self.player)
    }
    pub fn dealer_total(&self) -> u8 {
        hand_total(&self.dealer)
    }
    pub fn bet(&self) -> f64 {
        self.bet
    }
    pub fn is_settled(&self) -> bool {
        self.settled
    }
    pub fn outcome(&self) -> Option<BlackjackOutcome> {
        self.outcome
    }
}
