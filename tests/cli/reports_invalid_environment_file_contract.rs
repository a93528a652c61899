use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_required_key_names_the_file() {
    let ctx = TestContext::new();
    ctx.write_config(
        "config.dev.neon",
        "parameters:\n  database:\n    default:\n      adapter: mysql\n      host: db\n      dbname: app\n      user: root\n",
    );

    ctx.cli()
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid environment 'dev'"))
        .stderr(predicate::str::contains("config.dev.neon"))
        .stderr(predicate::str::contains("'password'"));
}

#[test]
fn undecodable_file_is_skipped_with_a_warning() {
    let ctx = TestContext::new();
    ctx.write_config("config.broken.neon", "parameters: [unclosed\n");
    ctx.write_environment("local", "127.0.0.1", None);

    ctx.cli()
        .args(["config", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"local\""))
        .stdout(predicate::str::contains("broken").not())
        .stderr(predicate::str::contains("could not be decoded"))
        .stderr(predicate::str::contains("config.broken.neon"));
}

#[test]
fn application_config_with_references_is_ignored() {
    let ctx = TestContext::new();
    ctx.write_config(
        "config.common.neon",
        "parameters:\n\tlogDir: %appDir%/../log\nservices:\n\trouter: @routerFactory::create\n",
    );
    ctx.write_environment("local", "127.0.0.1", Some(3307));

    ctx.cli()
        .args(["config", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"local\""))
        .stdout(predicate::str::contains("\"common\"").not())
        .stderr(predicate::str::contains("could not be decoded").not());
}

#[test]
fn invalid_pattern_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--pattern", "config.neon", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file pattern"));
}
