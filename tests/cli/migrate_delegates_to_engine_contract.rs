use crate::harness::{FakeEngine, TestContext};
use predicates::prelude::*;

#[test]
fn migrate_runs_engine_with_default_environment() {
    let ctx = TestContext::new();
    ctx.write_environment("local", "127.0.0.1", Some(3307));
    let engine = FakeEngine::new();

    ctx.cli_with_engine(&engine).arg("migrate").assert().success();

    let log = engine.get_log();
    assert!(log.starts_with("migrate --configuration "), "unexpected log: {log}");
    assert!(log.trim_end().ends_with("--environment local"), "unexpected log: {log}");

    let received = engine.received_config();
    assert_eq!(received["environments"]["local"]["host"].as_str(), Some("127.0.0.1"));
    assert_eq!(received["environments"]["local"]["port"].as_u64(), Some(3307));
}

#[test]
fn rollback_passes_environment_and_target() {
    let ctx = TestContext::new();
    ctx.write_environment("local", "127.0.0.1", None);
    ctx.write_environment("prod", "prod-db", None);
    let engine = FakeEngine::new();

    ctx.cli_with_engine(&engine)
        .args(["rollback", "-e", "prod", "-t", "20240101000000"])
        .assert()
        .success();

    assert!(engine.get_log().trim_end().ends_with("--environment prod --target 20240101000000"));
}

#[test]
fn engine_exit_code_is_propagated() {
    let ctx = TestContext::new();
    ctx.write_environment("local", "127.0.0.1", None);
    let engine = FakeEngine::new();

    ctx.cli_with_engine(&engine).arg("status").env("FAKE_ENGINE_EXIT", "3").assert().code(3);
}

#[test]
fn unknown_environment_fails_before_engine_runs() {
    let ctx = TestContext::new();
    ctx.write_environment("local", "127.0.0.1", None);
    let engine = FakeEngine::new();

    ctx.cli_with_engine(&engine)
        .args(["migrate", "--environment", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment 'staging' not found. Available: local"));

    assert!(engine.get_log().is_empty());
}

#[test]
fn missing_engine_is_reported() {
    let ctx = TestContext::new();
    ctx.write_environment("local", "127.0.0.1", None);

    ctx.cli()
        .args(["--engine", "neonmig-missing-engine", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be started"));
}

#[test]
fn unknown_command_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli().arg("seed").assert().failure().stderr(predicate::str::contains("seed"));
}
