use felt_cli::{run, ERROR, SUCCESS};

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.to_vec(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_prints_to_stdout_and_exits_zero() {
    let (code, out, _err) = run_args(&["felt", "--help"]);
    assert_eq!(code, SUCCESS);
    assert!(out.contains("play"));
    assert!(out.contains("cfg"));
}

#[test]
fn unknown_command_exits_two() {
    let (code, _out, err) = run_args(&["felt", "roulette"]);
    assert_eq!(code, ERROR);
    assert!(!err.is_empty());
}

#[test]
fn cfg_prints_resolved_settings_with_sources() {
    let (code, out, _err) = run_args(&["felt", "cfg"]);
    assert_eq!(code, SUCCESS);
    assert!(out.contains("starting_bankroll"));
    assert!(out.contains("source"));
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("cfg output is JSON");
    assert!(parsed["starting_bankroll"]["value"].is_number());
}

#[test]
fn play_rejects_garbage_flags() {
    let (code, _out, _err) = run_args(&["felt", "play", "--game", "baccarat"]);
    assert_eq!(code, ERROR);
}
