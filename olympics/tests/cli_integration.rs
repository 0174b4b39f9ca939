//! Integration tests for the olympics CLI

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::{tempdir, TempDir};

const DATA: &str = "\
ID\tName\tSex\tAge\tTeam\tNOC\tGames\tYear\tSeason\tCity\tSport\tEvent\tMedal
1\tA\tM\t21\tUSA-1\tUSA\t2008 Summer\t2008\tSummer\tBeijing\tSwimming\tSwimming Men's 200m\tGold
2\tB\tM\t25\tUSA-1\tUSA\t2008 Summer\t2008\tSummer\tBeijing\tJudo\tJudo Men's Lightweight\tNA
3\tC\tF\tNA\tChina\tCHN\t2008 Summer\t2008\tSummer\tBeijing\tDiving\tDiving Women's Platform\tSilver
4\tD\tF\t30\tUnited States\tUSA\t2004 Summer\t2004\tSummer\tAthina\tRowing\tRowing Women's Eights\tGold
5\tE\tF\t28\tUnited States\tUSA\t2004 Summer\t2004\tSummer\tAthina\tRowing\tRowing Women's Pairs\tBronze
6\tF\tM\t19\tNepal\tNEP\t1964 Summer\t1964\tSummer\tTokyo\tAthletics\tAthletics Men's Marathon\tNA
";

struct Fixture {
    dir: TempDir,
    data: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().expect("Failed to create temp dir");
        let data = dir.path().join("athlete_events.tsv");
        fs::write(&data, DATA).expect("Failed to write dataset");
        Fixture { dir, data }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn run_olympics(args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_olympics"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait for command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_olympics(&["--help"], "");

    assert!(success);
    assert!(stdout.contains("--medals"));
    assert!(stdout.contains("--total"));
    assert!(stdout.contains("--overall"));
    assert!(stdout.contains("--interactive"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_olympics(&["--version"], "");

    assert!(success);
    assert!(stdout.contains("olympics"));
}

#[test]
fn test_medals_report() {
    let fx = Fixture::new();
    let (stdout, _, success) = run_olympics(&[arg(&fx.data), "--medals", "USA", "2008"], "");

    assert!(success);
    assert!(stdout.contains("Medalists:"));
    assert!(stdout.contains(" 1.  | A    | Swimming | Gold  |"));
    assert!(!stdout.contains(" 2. "));
    assert!(stdout.contains("Total medals: Gold: 1, Silver: 0, Bronze: 0"));
}

#[test]
fn test_total_report_groups_display_names() {
    let fx = Fixture::new();
    let (stdout, _, success) = run_olympics(&[arg(&fx.data), "--total", "2008"], "");

    assert!(success);
    assert!(stdout.contains("Countries:"));
    assert!(stdout.contains("| Country | Gold | Silver | Bronze |"));
    assert!(stdout.contains(" 1.  | USA     |"));
    assert!(stdout.contains(" 2.  | China   |"));
}

#[test]
fn test_total_without_medals_fails() {
    let fx = Fixture::new();
    let (stdout, stderr, success) = run_olympics(&[arg(&fx.data), "--total", "1964"], "");

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error: No entries found"));
}

#[test]
fn test_overall_report() {
    let fx = Fixture::new();
    let (stdout, _, success) = run_olympics(&[arg(&fx.data), "--overall", "USA", "CHN"], "");

    assert!(success);
    assert!(stdout.contains("Best Performances:"));
    // USA has 1 medal in 2008 and 2 in 2004
    assert!(stdout.contains("| USA     | 2004 |   2    |"));
    assert!(!stdout.contains("| USA     | 2008 |"));
    assert!(stdout.contains("| China   | 2008 |   1    |"));
}

#[test]
fn test_output_file_matches_stdout() {
    let fx = Fixture::new();
    let out = fx.path("report.txt");
    let (stdout, _, success) =
        run_olympics(&[arg(&fx.data), "--total", "2004", "--output", arg(&out)], "");

    assert!(success);
    let written = fs::read_to_string(&out).expect("output file written");
    assert_eq!(written, stdout);
}

#[test]
fn test_json_output() {
    let fx = Fixture::new();
    let (stdout, _, success) =
        run_olympics(&[arg(&fx.data), "--medals", "USA", "2004", "--json"], "");

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["year"], 2004);
    assert_eq!(parsed["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(parsed["total"]["bronze"], 1);
}

#[test]
fn test_interactive_session() {
    let fx = Fixture::new();
    let (stdout, _, success) = run_olympics(
        &[arg(&fx.data), "--interactive"],
        "Atlantis\nNepal\nUSA\nexit()\n",
    );

    assert!(success);
    assert!(stdout.contains("No entries found"));
    assert!(stdout.contains("The first time in the Olympics was in 1964 in Tokyo city."));
    assert!(stdout.contains("The first time in the Olympics was in 2004 in Athina city."));
    assert!(stdout.contains("Best performance game was 2004 Summer with 2 medals."));
    assert!(stdout.contains("Worst performance game was 2008 Summer with 1 medals."));
    assert!(stdout.trim_end().ends_with("Exiting..."));
}

#[test]
fn test_interactive_stops_at_end_of_input() {
    let fx = Fixture::new();
    let (stdout, _, success) = run_olympics(&[arg(&fx.data), "-i"], "Nepal\n");

    assert!(success);
    assert!(stdout.contains("Nepal"));
    assert!(stdout.trim_end().ends_with("Exiting..."));
}

#[test]
fn test_missing_file() {
    let fx = Fixture::new();
    let missing = fx.path("nope.tsv");
    let (_, stderr, success) = run_olympics(&[arg(&missing), "--total", "2008"], "");

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("nope.tsv"));
}

#[test]
fn test_malformed_file() {
    let fx = Fixture::new();
    let bad = fx.path("bad.tsv");
    fs::write(&bad, "Name\tTeam\nA\tUSA\n").unwrap();
    let (_, stderr, success) = run_olympics(&[arg(&bad), "--total", "2008"], "");

    assert!(!success);
    assert!(stderr.contains("missing required column"));
}

#[test]
fn test_mode_is_required() {
    let fx = Fixture::new();
    let (_, stderr, success) = run_olympics(&[arg(&fx.data)], "");

    assert!(!success);
    assert!(!stderr.is_empty());
}
