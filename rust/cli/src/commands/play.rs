//! # Play Command
//!
//! The interactive table loop. The player picks a game on the command line,
//! then the loop repeats: show the bankroll, take a wager, play the round
//! out, settle, and offer another. Going broke swaps the bet prompt for the
//! casino's one act of mercy: sweeping the floor for a cent a pass.
//!
//! Everything rendered here comes out of the engine's view payloads; this
//! module never reaches into round internals.

use crate::cli::Game;
use crate::config;
use crate::error::CliError;
use crate::ui::{self, format_hand, format_money};
use crate::validation::{parse_bet, parse_selection};
use felt_engine::cards::Card;
use felt_engine::errors::GameError;
use felt_engine::logger::{GameKind, RoundLogger, RoundRecord};
use felt_engine::table::Table;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// A settled round, reduced to what the history log needs.
struct SettledRound {
    player: Vec<Card>,
    dealer: Vec<Card>,
    outcome: String,
    bankroll_after: f64,
}

/// Handle the play command: an interactive session at one table.
///
/// # Arguments
///
/// * `game` - Which game to sit at
/// * `seed` - RNG seed (default: configured seed, else random)
/// * `bankroll` - Starting bankroll (default: configured stake)
/// * `log` - Optional JSONL round-history path
/// * `out` / `err` - Output streams
/// * `stdin` - Input stream for wagers and actions
pub fn handle_play_command(
    game: Game,
    seed: Option<u64>,
    bankroll: Option<f64>,
    log: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let starting = bankroll.unwrap_or(cfg.starting_bankroll);
    if !starting.is_finite() || starting < 0.0 {
        ui::write_error(err, "bankroll must be a non-negative number")?;
        return Err(CliError::InvalidInput(
            "bankroll must be a non-negative number".to_string(),
        ));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let log = log.or(cfg.log_path.map(PathBuf::from));
    let mut logger = match &log {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(out, "{} table, seed {}", game.as_str(), seed)?;
    let mut table = Table::new(starting, Some(seed));

    loop {
        if table.is_broke() {
            writeln!(out, "You're broke. Clean the floors.")?;
            ui::prompt(out, "Sweep a pass? [enter sweeps, q leaves] ")?;
            match ui::read_stdin_line(stdin).as_deref() {
                None | Some("q") | Some("quit") => break,
                Some(_) => {
                    let balance = table.clean_floors();
                    writeln!(out, "You sweep the floor. {}", format_money(balance))?;
                    continue;
                }
            }
        }

        writeln!(out, "Bankroll: {}", format_money(table.bankroll()))?;
        ui::prompt(out, "Bet (q to leave): ")?;
        let line = match ui::read_stdin_line(stdin) {
            None => break,
            Some(l) => l,
        };
        if line == "q" || line == "quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        let bet = match parse_bet(&line) {
            Ok(b) => b,
            Err(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        let before = table.bankroll();
        let settled = match game {
            Game::Blackjack => play_blackjack_round(&mut table, bet, out, err, stdin)?,
            Game::Poker => play_poker_round(&mut table, bet, out, err, stdin)?,
        };
        // a rejected wager never reaches settlement
        let Some(settled) = settled else { continue };

        if let Some(logger) = logger.as_mut() {
            let record = RoundRecord {
                round_id: logger.next_id(),
                game: match game {
                    Game::Blackjack => GameKind::Blackjack,
                    Game::Poker => GameKind::Poker,
                },
                seed: Some(seed),
                bet,
                player: settled.player,
                dealer: settled.dealer,
                outcome: settled.outcome,
                payout: settled.bankroll_after - (before - bet),
                bankroll_after: settled.bankroll_after,
                ts: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out, "You leave with {}", format_money(table.bankroll()))?;
    Ok(())
}

fn play_blackjack_round(
    table: &mut Table,
    bet: f64,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<SettledRound>, CliError> {
    let mut view = match table.start_blackjack(bet) {
        Ok(v) => v,
        Err(e @ GameError::InvalidBet { .. }) => {
            ui::write_error(err, &e.to_string())?;
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    render_blackjack(out, &view.player, view.player_total, &view.dealer, view.dealer_total)?;

    while view.can_hit {
        ui::prompt(out, "[h]it or [s]tand? ")?;
        match ui::read_stdin_line(stdin).as_deref() {
            // walking away mid-hand plays the house's way: stand
            None | Some("s") | Some("stand") => view = table.stand()?,
            Some("h") | Some("hit") => view = table.hit()?,
            Some(other) => {
                ui::write_error(err, &format!("Unknown action: {:?}", other))?;
                continue;
            }
        }
        render_blackjack(out, &view.player, view.player_total, &view.dealer, view.dealer_total)?;
    }

    let outcome = view.message.clone().unwrap_or_default();
    writeln!(out, "{}", outcome)?;
    Ok(Some(SettledRound {
        player: view.player,
        dealer: view.dealer,
        outcome,
        bankroll_after: view.bankroll,
    }))
}

fn render_blackjack(
    out: &mut dyn Write,
    player: &[Card],
    player_total: u8,
    dealer: &[Card],
    dealer_total: u8,
) -> std::io::Result<()> {
    writeln!(out, "You:    {} ({})", format_hand(player), player_total)?;
    writeln!(out, "Dealer: {} ({})", format_hand(dealer), dealer_total)
}

fn play_poker_round(
    table: &mut Table,
    bet: f64,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<SettledRound>, CliError> {
    let view = match table.start_poker(bet) {
        Ok(v) => v,
        Err(e @ GameError::InvalidBet { .. }) => {
            ui::write_error(err, &e.to_string())?;
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    writeln!(out, "You:    {}", format_hand(&view.player))?;
    writeln!(out, "Dealer: {}", format_hand(&view.dealer))?;

    let selection = loop {
        ui::prompt(out, "Exchange which cards? (e.g. 1 3 5, enter keeps all): ")?;
        match ui::read_stdin_line(stdin) {
            None => break [false; 5],
            Some(line) => match parse_selection(&line) {
                Ok(sel) => break sel,
                Err(msg) => ui::write_error(err, &msg)?,
            },
        }
    };

    let view = table.exchange_poker(selection)?;
    writeln!(
        out,
        "You:    {} - {}",
        format_hand(&view.player),
        view.player_rank.map(|r| r.name()).unwrap_or("?")
    )?;
    writeln!(
        out,
        "Dealer: {} - {}",
        format_hand(&view.dealer),
        view.dealer_rank.map(|r| r.name()).unwrap_or("?")
    )?;

    let outcome = view.message.clone().unwrap_or_default();
    writeln!(out, "{}", outcome)?;
    Ok(Some(SettledRound {
        player: view.player,
        dealer: view.dealer,
        outcome,
        bankroll_after: view.bankroll,
    }))
}
