use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn config_prints_merged_environments_as_json() {
    let ctx = TestContext::new();
    ctx.write_environment("dev", "dev-db", None);
    ctx.write_environment("prod", "prod-db", Some(3307));
    ctx.write_config("config.common.neon", "parameters:\n  mailer: smtp\n");
    ctx.write_config("config.empty.neon", "");

    let output =
        ctx.cli().args(["config", "--format", "json"]).assert().success().get_output().clone();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let environments = json["environments"].as_object().unwrap();
    assert_eq!(environments.len(), 4);
    assert_eq!(environments["default_migration_table"], "phinxlog");
    assert_eq!(environments["default_database"], "local");
    assert_eq!(environments["dev"]["host"], "dev-db");
    assert_eq!(environments["dev"]["name"], "dev_db");
    assert_eq!(environments["dev"]["pass"], "secret");
    assert_eq!(environments["dev"]["charset"], "utf8");
    assert!(environments["dev"].get("port").is_none());
    assert_eq!(environments["prod"]["port"], 3307);
    assert!(json["paths"]["migrations"].as_str().unwrap().ends_with("work/migrations"));
}

#[test]
fn config_defaults_to_yaml() {
    let ctx = TestContext::new();
    ctx.write_environment("local", "127.0.0.1", Some(3307));

    ctx.cli()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_migration_table: phinxlog"))
        .stdout(predicate::str::contains("port: 3307"));
}

#[test]
fn cli_flags_override_defaults() {
    let ctx = TestContext::new();
    ctx.write_environment("staging", "stage-db", None);

    ctx.cli()
        .args([
            "--migration-table",
            "schema_log",
            "--default-environment",
            "staging",
            "config",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_migration_table\": \"schema_log\""))
        .stdout(predicate::str::contains("\"default_database\": \"staging\""));
}
