//! Terminal I/O helpers: prompt reading and the formatting every screen of
//! the table shares (money, hands, totals).

use felt_engine::cards::Card;
use std::io::{BufRead, Write};

/// Reads a line of input, blocking until available. Trims whitespace and
/// returns `None` on EOF or read errors, which callers treat as "leave the
/// table".
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Write a prompt without a trailing newline and flush so it shows up
/// before the read blocks.
pub fn prompt(out: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    write!(out, "{}", msg)?;
    out.flush()
}

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// One-line hand rendering: `A♠ 10♥ K♦`
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
