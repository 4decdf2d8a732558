use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_slimecalc");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn slimecalc")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "slimecalc failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn chunk_subcommand_prints_geometry() {
    let lines = stdout_lines(&run(&["chunk", "123", "456"]));
    assert_eq!(lines[0], "Block (123, 456) is in chunk (7, 28)");
    assert_eq!(lines[1], "The center of this chunk is at block (119, 455)");
}

#[test]
fn slime_subcommand_accepts_negative_coordinates() {
    let lines = stdout_lines(&run(&["slime", "-10", "5"]));
    assert_eq!(
        lines,
        vec![
            "Block (-10, 5) is in chunk (-1, 0)".to_string(),
            "Chunk (-1, 0) is a slime chunk!".to_string(),
        ]
    );
}

#[test]
fn direction_subcommand_as_json() {
    let output = run(&["direction", "100", "200", "120", "180", "--json"]);
    let text = stdout_lines(&output).join("\n");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json output");
    assert_eq!(value["kind"], "bearing");
    assert_eq!(value["direction"], "Southeast");
    assert_eq!(value["distance"], 28);
    assert_eq!(value["manhattan"], 40);
}

#[test]
fn exec_runs_slash_command() {
    let lines = stdout_lines(&run(&["exec", "/overworld", "16", "-32"]));
    assert_eq!(lines, vec!["Nether (16, -32) -> Overworld (128, -256)".to_string()]);
}

#[test]
fn unknown_slash_command_fails() {
    let output = run(&["exec", "/fly"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command"));
}

#[test]
fn script_reports_each_command() {
    let path = std::env::temp_dir().join(format!("slimecalc-smoke-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"commands": ["/slimechunk 0 0", "/map -3 -3 3 3"]}"#)
        .expect("write script");
    let lines = stdout_lines(&run(&["script", path.to_str().unwrap()]));
    assert_eq!(lines[0], "> /slimechunk 0 0");
    assert_eq!(lines[1], "Chunk (0, 0) is NOT a slime chunk.");
    assert_eq!(lines[2], "> /map -3 -3 3 3");
    assert_eq!(lines[3], "Slime chunks in (-3, -3) to (3, 3): 7 of 49");
    assert_eq!(lines[6], "#..##..");
}

#[test]
fn init_config_writes_defaults_once() {
    let dir = std::env::temp_dir().join(format!("slimecalc-init-{}", std::process::id()));
    let path = dir.join("slimecalc.toml");
    let _ = std::fs::remove_file(&path);
    let path_arg = path.to_str().unwrap();

    let lines = stdout_lines(&run(&["init-config", "--config", path_arg]));
    assert!(lines[0].starts_with("Wrote default configuration"));
    let written = std::fs::read_to_string(&path).expect("config written");
    assert!(written.contains("map_radius = 8"));
    assert!(written.contains("nearest_radius = 32"));

    let again = run(&["init-config", "--config", path_arg]);
    assert!(!again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("already exists"));

    stdout_lines(&run(&["init-config", "--config", path_arg, "--force"]));
}
