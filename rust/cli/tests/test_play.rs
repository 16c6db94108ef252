use std::io::Cursor;

use felt_cli::cli::Game;
use felt_cli::commands::handle_play_command;

fn play(
    game: Game,
    seed: u64,
    bankroll: f64,
    log: Option<std::path::PathBuf>,
    input: &str,
) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.to_string());
    handle_play_command(
        game,
        Some(seed),
        Some(bankroll),
        log,
        &mut out,
        &mut err,
        &mut stdin,
    )
    .expect("session should run to completion");
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn blackjack_session_with_piped_input_settles_and_exits() {
    let (out, _err) = play(Game::Blackjack, 42, 50.0, None, "5\ns\nq\n");
    assert!(out.contains("blackjack table, seed 42"));
    assert!(out.contains("Bankroll: $50.00"));
    assert!(out.contains("You:"));
    assert!(out.contains("Dealer:"));
    assert!(out.contains("You leave with"));
}

#[test]
fn poker_session_exchanges_and_reports_ranks() {
    let (out, _err) = play(Game::Poker, 7, 20.0, None, "3\n1 2\nq\n");
    assert!(out.contains("poker table, seed 7"));
    // both hands get a category name after the exchange
    let rank_lines = out
        .lines()
        .filter(|l| l.contains(" - "))
        .count();
    assert!(rank_lines >= 2, "expected rank lines in output:\n{}", out);
    assert!(out.contains("You leave with"));
}

#[test]
fn eof_mid_round_stands_and_leaves_cleanly() {
    let (out, _err) = play(Game::Blackjack, 9, 10.0, None, "5\n");
    // the round still settles (stand on EOF) and the session closes
    assert!(out.contains("You leave with"));
}

#[test]
fn bad_wagers_reprompt_without_crashing() {
    let (out, err) = play(Game::Blackjack, 3, 50.0, None, "abc\n200\n5\ns\nq\n");
    assert!(err.contains("Enter a valid bet."));
    assert!(err.contains("Invalid bet amount"));
    assert!(out.contains("You leave with"));
}

#[test]
fn broke_player_can_sweep_floors() {
    // one sweep pays a cent, which is enough to get back to the bet prompt
    let (out, _err) = play(Game::Blackjack, 1, 0.0, None, "\nq\n");
    assert!(out.contains("You're broke. Clean the floors."));
    assert!(out.contains("You sweep the floor. $0.01"));
    assert!(out.contains("Bankroll: $0.01"));
    assert!(out.contains("You leave with $0.01"));
}

#[test]
fn log_flag_writes_jsonl_round_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    play(Game::Poker, 11, 20.0, Some(path.clone()), "2\n\nq\n");

    let content = std::fs::read_to_string(&path).expect("history file written");
    assert!(content.ends_with('\n'));
    let line = content.lines().next().expect("one settled round logged");
    let record: serde_json::Value = serde_json::from_str(line).expect("valid JSON line");
    assert_eq!(record["game"], "poker");
    assert_eq!(record["seed"], 11);
    assert!(record["round_id"].as_str().unwrap().ends_with("-000001"));
    assert!(record["ts"].is_string());
}

#[test]
fn same_seed_replays_the_same_session() {
    let (a, _) = play(Game::Poker, 123, 30.0, None, "4\n1 3 5\nq\n");
    let (b, _) = play(Game::Poker, 123, 30.0, None, "4\n1 3 5\nq\n");
    assert_eq!(a, b);
}
