use std::process::{Command, Output};

fn flagctl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flagctl"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run flagctl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ---------------------------------------------------------------------------
// launch / deploy
// ---------------------------------------------------------------------------

#[test]
fn launch_prints_defaults_as_json() {
    let out = flagctl(&["--json", "launch"]);
    assert!(out.status.success());

    let plan = json(&out);
    assert_eq!(plan["org"], "");
    assert_eq!(plan["remote_only"], true);
    assert_eq!(plan["yes"], false);
    assert_eq!(plan["now"], false);
    assert_eq!(plan["no_deploy"], false);
}

#[test]
fn launch_accepts_shorthand_and_explicit_false() {
    let out = flagctl(&["-j", "launch", "-y", "--remote-only=false", "--region", "ams"]);
    assert!(out.status.success());

    let plan = json(&out);
    assert_eq!(plan["yes"], true);
    assert_eq!(plan["remote_only"], false);
    assert_eq!(plan["region"], "ams");
}

#[test]
fn deploy_prints_text_plan() {
    let out = flagctl(&["deploy", "--name", "web", "-e", "A=1,B=2"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("name: web\n"));
    assert!(text.contains("env: A=1,B=2\n"));
    assert!(text.contains("wait_timeout: 120\n"));
}

#[test]
fn deploy_rejects_non_integer_timeout() {
    let out = flagctl(&["deploy", "--wait-timeout", "soon"]);
    assert!(!out.status.success());
}

#[test]
fn unknown_flag_is_rejected_by_clap() {
    let out = flagctl(&["launch", "--regoin", "ams"]);
    assert!(!out.status.success());
}

// ---------------------------------------------------------------------------
// flags
// ---------------------------------------------------------------------------

#[test]
fn flags_lists_launch_flags_in_order() {
    let out = flagctl(&["flags", "launch"]);
    assert!(out.status.success());

    let report = json(&out);
    assert_eq!(report["command"], "launch");
    let names: Vec<&str> = report["flags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "org",
            "name",
            "region",
            "image",
            "now",
            "no-deploy",
            "generate-name",
            "remote-only",
            "yes"
        ]
    );
}

#[test]
fn flags_reports_root_visibility_and_bindings() {
    let out = flagctl(&["flags"]);
    assert!(out.status.success());

    let report = json(&out);
    let flags = report["flags"].as_array().unwrap();
    let local_only = flags.iter().find(|f| f["name"] == "local-only").unwrap();
    assert_eq!(local_only["hidden"], true);
    let verbose = flags.iter().find(|f| f["name"] == "verbose").unwrap();
    assert_eq!(verbose["hidden"], false);

    let bindings = report["bindings"].as_array().unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0]["flag"], "access-token");
    assert_eq!(bindings[0]["env_name"], "FLY_ACCESS_TOKEN");
}

#[test]
fn flags_table_format() {
    let out = flagctl(&["flags", "deploy", "--format", "table"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.starts_with("Command: deploy\n"));
    assert!(text.contains("-e, --env"));
    assert!(text.contains("[default: 120]"));
}

#[test]
fn flags_format_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("flagctl.yml");
    std::fs::write(&config, "format: yaml\n").unwrap();

    let out = flagctl(&["--config", config.to_str().unwrap(), "flags", "deploy"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("command: deploy\n"));
}

#[test]
fn flags_unknown_command_fails() {
    let out = flagctl(&["flags", "destroy"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown command: destroy"));
}

#[test]
fn missing_config_file_fails() {
    let out = flagctl(&["--config", "/nonexistent/flagctl.yml", "flags"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("I/O error"));
}

#[test]
fn hidden_flag_absent_from_help() {
    let out = flagctl(&["--help"]);
    assert!(out.status.success());

    let help = stdout(&out);
    assert!(help.contains("--access-token"));
    assert!(!help.contains("--local-only"));
}
