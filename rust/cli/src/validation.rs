//! Parsing of interactive input. Range rules live in the engine (a bet the
//! bankroll cannot cover is its call to reject); this module only turns
//! text into values.

/// Parse a wager. Anything unparseable is rejected here; NaN and friends
/// parse fine and are left for the engine's wager validation to refuse.
pub fn parse_bet(input: &str) -> Result<f64, String> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| "Enter a valid bet.".to_string())
}

/// Parse an exchange selection like `1 3 5` (or `1,3,5`) into the per-slot
/// flags the engine takes. Empty input keeps every card.
pub fn parse_selection(input: &str) -> Result<[bool; 5], String> {
    let mut selection = [false; 5];
    for token in input.replace(',', " ").split_whitespace() {
        let n: usize = token
            .parse()
            .map_err(|_| format!("Not a card number: {:?}", token))?;
        if !(1..=5).contains(&n) {
            return Err("Card numbers are 1-5.".to_string());
        }
        selection[n - 1] = true;
    }
    Ok(selection)
}
