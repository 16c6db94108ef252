use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The table's shared money. Both game engines place wagers and settle
/// payouts exclusively through [`debit`](Bankroll::debit) and
/// [`credit`](Bankroll::credit), so the wager invariant lives in one place:
/// a bet must be a positive finite amount no larger than the balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bankroll {
    balance: f64,
}

impl Bankroll {
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn is_broke(&self) -> bool {
        self.balance <= 0.0
    }

    /// Check a wager without placing it. Rejects non-finite (NaN, ±inf),
    /// non-positive, and over-bankroll amounts.
    pub fn validate_bet(&self, amount: f64) -> Result<(), GameError> {
        if !amount.is_finite() || amount <= 0.0 || amount > self.balance {
            return Err(GameError::InvalidBet {
                amount,
                bankroll: self.balance,
            });
        }
        Ok(())
    }

    /// Place a wager: validate, then subtract. A rejected wager leaves the
    /// balance untouched.
    pub fn debit(&mut self, amount: f64) -> Result<(), GameError> {
        self.validate_bet(amount)?;
        self.balance -= amount;
        Ok(())
    }

    pub fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }
}
