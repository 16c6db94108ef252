use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::bankroll::Bankroll;
use crate::blackjack::BlackjackRound;
use crate::cards::Card;
use crate::errors::GameError;
use crate::poker::{HandRank, PokerRound};

/// What one round of floor sweeping pays.
pub const CHORE_PAY: f64 = 0.01;

const DEFAULT_SEED: u64 = 0xF317_CA5D;

/// One player's casino session: the bankroll, at most one live round of each
/// game, and the master RNG that every deck shuffle and dealer decision is
/// derived from. Owned by the presentation collaborator and passed into every
/// call; there is no hidden global state. The two games never interact.
///
/// # Examples
///
/// ```
/// use felt_engine::table::Table;
///
/// let mut table = Table::new(10.0, Some(42));
/// let view = table.start_blackjack(5.0).expect("bet within bankroll");
/// assert_eq!(view.player.len(), 2);
/// assert!((view.bankroll - 5.0).abs() < 1e-9);
/// assert!(view.can_hit && view.can_stand);
/// ```
#[derive(Debug)]
pub struct Table {
    bankroll: Bankroll,
    rng: ChaCha20Rng,
    blackjack: Option<BlackjackRound>,
    poker: Option<PokerRound>,
}

/// Render payload for a blackjack call. The collaborator re-renders from
/// this alone; `can_hit`/`can_stand` gate the action buttons.
#[derive(Debug, Clone, Serialize)]
pub struct BlackjackView {
    pub player: Vec<Card>,
    pub dealer: Vec<Card>,
    pub player_total: u8,
    pub dealer_total: u8,
    pub message: Option<String>,
    pub bankroll: f64,
    pub can_hit: bool,
    pub can_stand: bool,
}

impl BlackjackView {
    fn of(round: &BlackjackRound, bankroll: f64) -> Self {
        let live = !round.is_settled();
        Self {
            player: round.player().to_vec(),
            dealer: round.dealer().to_vec(),
            player_total: round.player_total(),
            dealer_total: round.dealer_total(),
            message: round.outcome().map(|o| o.message().to_string()),
            bankroll,
            can_hit: live,
            can_stand: live,
        }
    }
}

/// Render payload for a poker call. Ranks appear once the exchange has
/// settled the round.
#[derive(Debug, Clone, Serialize)]
pub struct PokerView {
    pub player: Vec<Card>,
    pub dealer: Vec<Card>,
    pub player_rank: Option<HandRank>,
    pub dealer_rank: Option<HandRank>,
    pub message: Option<String>,
    pub bankroll: f64,
    pub can_exchange: bool,
}

impl PokerView {
    fn of(round: &PokerRound, bankroll: f64) -> Self {
        Self {
            player: round.player().to_vec(),
            dealer: round.dealer().to_vec(),
            player_rank: round.player_rank(),
            dealer_rank: round.dealer_rank(),
            message: round.outcome().map(|o| o.message().to_string()),
            bankroll,
            can_exchange: !round.is_settled(),
        }
    }
}

impl Table {
    /// A table with the given starting bankroll. `None` falls back to a
    /// fixed seed; pass `rand::random()` for a fresh session.
    pub fn new(starting_bankroll: f64, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            bankroll: Bankroll::new(starting_bankroll),
            rng: ChaCha20Rng::seed_from_u64(seed),
            blackjack: None,
            poker: None,
        }
    }

    pub fn bankroll(&self) -> f64 {
        self.bankroll.balance()
    }

    pub fn is_broke(&self) -> bool {
        self.bankroll.is_broke()
    }

    /// Sweep the casino floor for a fixed wage. Returns the new balance.
    pub fn clean_floors(&mut self) -> f64 {
        self.bankroll.credit(CHORE_PAY);
        self.bankroll.balance()
    }

    /// Start a blackjack round: debit the wager, deal two cards each.
    /// Replaces any previous blackjack round; a live one forfeits its stake.
    pub fn start_blackjack(&mut self, bet: f64) -> Result<BlackjackView, GameError> {
        let seed = self.rng.next_u64();
        let round = BlackjackRound::deal(&mut self.bankroll, bet, seed)?;
        let view = BlackjackView::of(&round, self.bankroll.balance());
        self.blackjack = Some(round);
        Ok(view)
    }

    /// Draw one card into the player's blackjack hand. No-op after
    /// settlement.
    pub fn hit(&mut self) -> Result<BlackjackView, GameError> {
        let round = self.blackjack.as_mut().ok_or(GameError::NoRoundInProgress)?;
        round.hit(&mut self.bankroll)?;
        Ok(BlackjackView::of(round, self.bankroll.balance()))
    }

    /// Let the dealer draw out and settle the blackjack round. No-op after
    /// settlement.
    pub fn stand(&mut self) -> Result<BlackjackView, GameError> {
        let round = self.blackjack.as_mut().ok_or(GameError::NoRoundInProgress)?;
        round.stand(&mut self.bankroll)?;
        Ok(BlackjackView::of(round, self.bankroll.balance()))
    }

    /// Start a poker round: debit the wager, deal five cards each.
    /// Replaces any previous poker round; a live one forfeits its stake.
    pub fn start_poker(&mut self, bet: f64) -> Result<PokerView, GameError> {
        let deck_seed = self.rng.next_u64();
        let dealer_seed = self.rng.next_u64();
        let round = PokerRound::deal(&mut self.bankroll, bet, deck_seed, dealer_seed)?;
        let view = PokerView::of(&round, self.bankroll.balance());
        self.poker = Some(round);
        Ok(view)
    }

    /// Exchange the selected player cards, let the dealer exchange, and
    /// settle. The one permitted exchange; a no-op after settlement.
    pub fn exchange_poker(&mut self, selection: [bool; 5]) -> Result<PokerView, GameError> {
        let round = self.poker.as_mut().ok_or(GameError::NoRoundInProgress)?;
        round.exchange(&mut self.bankroll, selection)?;
        Ok(PokerView::of(round, self.bankroll.balance()))
    }
}
