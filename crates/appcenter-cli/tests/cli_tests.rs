//! End-to-end tests that invoke the compiled `appcenter-artifact` binary.

use appcenter_test_utils::TestWorkspace;
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("appcenter-artifact").expect("binary should build");
    cmd.env_remove("APPCENTER_CONFIG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_exits_zero() {
    cli().arg("--help").assert().success();
}

#[test]
fn content_type_needs_no_files() {
    cli()
        .args(["content-type", "does/not/exist.msixsym", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("application/x-msixupload"))
        .stdout(predicate::str::contains("application/octet-stream"));
}

#[test]
fn inspect_reports_fixture() {
    let ws = TestWorkspace::new();
    ws.stage_fixture_apk("three/days/xiola.apk");

    cli()
        .args(["inspect", "three/days/xiola.apk", "--root"])
        .arg(ws.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("xiola.apk"))
        .stdout(predicate::str::contains("41 bytes"))
        .stdout(predicate::str::contains("application/vnd.android.package-archive"));
}

#[test]
fn inspect_json_defaults_to_current_directory() {
    let ws = TestWorkspace::new();
    ws.write_file("App.appx", b"appx");

    let output = cli()
        .current_dir(ws.root())
        .args(["inspect", "App.appx", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let artifacts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(artifacts[0]["file_name"], "App.appx");
    assert_eq!(artifacts[0]["size"], 4);
    assert_eq!(artifacts[0]["content_type"], "application/x-appx");
}

#[test]
fn inspect_missing_file_fails() {
    let ws = TestWorkspace::new();

    cli()
        .args(["inspect", "missing.apk", "--root"])
        .arg(ws.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.apk"));
}

#[test]
fn plan_reads_default_config() {
    let ws = TestWorkspace::new();
    ws.stage_fixture_apk("out/xiola.apk");
    ws.write_file(
        "appcenter.toml",
        b"owner_name = \"janes-addiction\"\napp_name = \"ritual\"\npath_to_app = \"out/xiola.apk\"\ndistribution_groups = [\"Testers\"]\n",
    );

    cli()
        .current_dir(ws.root())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("janes-addiction"))
        .stdout(predicate::str::contains("41 bytes"))
        .stdout(predicate::str::contains("Testers"));
}

#[test]
fn plan_without_config_fails() {
    let ws = TestWorkspace::new();

    cli()
        .current_dir(ws.root())
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("appcenter.toml"));
}

#[test]
fn plan_json_with_absolute_root() {
    let agent = TestWorkspace::new();
    agent.stage_fixture_apk("out/xiola.apk");
    agent.write_file("out/App.msixsym", b"symbols");
    let config_dir = TestWorkspace::new();
    let root = agent.root().to_string_lossy().replace('\\', "/");
    let config = config_dir.write_file(
        "upload.json",
        format!(
            r#"{{"owner_name": "o", "app_name": "a", "path_to_app": "out/xiola.apk",
                "path_to_debug_symbols": "out/App.msixsym", "root": "{root}"}}"#
        )
        .as_bytes(),
    );

    let output = cli()
        .args(["plan", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let artifacts = plan["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 2);
    assert_eq!(artifacts[0]["size"], 41);
    assert_eq!(artifacts[0]["content_type"], "application/vnd.android.package-archive");
    assert_eq!(artifacts[1]["size"], 7);
    assert_eq!(artifacts[1]["content_type"], "application/x-msixupload");
    assert!(plan["release_notes"].is_null());
}
