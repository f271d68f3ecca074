use shortstack_cli::run_with_input;
use std::io::Cursor;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut input = Cursor::new(Vec::new());
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["shortstack"];
    argv.extend_from_slice(args);
    let code = run_with_input(argv, &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_lists_every_command() {
    let (code, stdout, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    for cmd in ["play", "sim", "deal", "eval", "cfg"] {
        assert!(stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn unknown_command_prints_usage_and_fails() {
    let (code, stdout, stderr) = run_cli(&["bench"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage: shortstack <command>"));
    assert!(stderr.contains("  eval"));
}

#[test]
fn deal_is_reproducible_from_seed() {
    let first = run_cli(&["deal", "--seed", "11"]);
    let second = run_cli(&["deal", "--seed", "11"]);
    assert_eq!(first.0, 0, "stderr: {}", first.2);
    assert_eq!(first.1, second.1);
    assert!(first.1.contains("Winner: "));
}

#[test]
fn deal_honours_bot_count() {
    let (code, stdout, _) = run_cli(&["deal", "--seed", "1", "--bots", "6"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.matches("Hole Bot").count(), 6);
}

#[test]
fn sim_writes_one_history_line_per_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("hands.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let (code, stdout, stderr) = run_cli(&[
        "sim", "--hands", "25", "--seed", "3", "--output", &path_str,
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let played: usize = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Played ")?.strip_suffix(" hands")?.parse().ok())
        .expect("summary line");
    assert!(played >= 1 && played <= 25);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains('\r'));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), played);
    for (i, line) in lines.iter().enumerate() {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        let id = v["hand_id"].as_str().unwrap();
        assert!(id.ends_with(&format!("-{:06}", i + 1)), "{id}");
        assert_eq!(v["seed"].as_u64(), Some(3 + i as u64));
        assert!(v["ts"].is_string());
    }
}

#[test]
fn sim_output_is_deterministic() {
    let a = run_cli(&["sim", "--hands", "15", "--seed", "99"]);
    let b = run_cli(&["sim", "--hands", "15", "--seed", "99"]);
    assert_eq!(a.0, 0);
    assert_eq!(a.1, b.1);
}

#[test]
fn sim_needs_two_bots() {
    let (code, _, stderr) = run_cli(&["sim", "--bots", "1", "--seed", "1"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("at least 2 bots"));
}

#[test]
fn zero_hands_is_rejected() {
    for cmd in ["sim", "eval"] {
        let (code, _, stderr) = run_cli(&[cmd, "--hands", "0", "--seed", "1"]);
        assert_eq!(code, 2, "{cmd}");
        assert!(stderr.starts_with("Error: Invalid input: hands must be >= 1"));
    }
}

#[test]
fn eval_reports_every_seat_and_balances() {
    let (code, stdout, stderr) = run_cli(&["eval", "--hands", "30", "--seed", "5", "--bots", "3"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("eval: ai=heuristic vs Passive"));
    for seat in ["Bot1", "Bot2", "Bot3", "Passive"] {
        assert!(stdout.contains(seat), "missing {seat}");
    }

    // per-seat nets sum to zero
    let total: i64 = stdout
        .lines()
        .skip(2)
        .take(4)
        .map(|l| l.split_whitespace().nth(2).unwrap().parse::<i64>().unwrap())
        .sum();
    assert_eq!(total, 0);
}

#[test]
fn eval_rejects_unknown_policy() {
    let (code, _, stderr) = run_cli(&["eval", "--ai", "oracle", "--hands", "1"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Unknown AI type: oracle"));
}
