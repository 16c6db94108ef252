use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount} (bankroll: {bankroll})")]
    InvalidBet { amount: f64, bankroll: f64 },
    #[error("Deck exhausted mid-deal")]
    EmptyDeck,
    #[error("No round in progress")]
    NoRoundInProgress,
}
