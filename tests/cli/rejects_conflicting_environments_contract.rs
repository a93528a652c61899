use crate::harness::TestContext;
use predicates::prelude::*;

fn write_twice(ctx: &TestContext) {
    ctx.write_environment("dev", "neon-db", None);
    ctx.write_config(
        "config.dev.yaml",
        "parameters:\n  database:\n    default:\n      adapter: pgsql\n      host: yaml-db\n      dbname: app\n      user: app\n      password: pw\n",
    );
}

#[test]
fn duplicate_environment_is_rejected_by_default() {
    let ctx = TestContext::new();
    write_twice(&ctx);

    ctx.cli()
        .args(["--pattern", "config.*.neon", "--pattern", "config.*.yaml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment 'dev' is defined by both"))
        .stderr(predicate::str::contains("config.dev.neon"))
        .stderr(predicate::str::contains("config.dev.yaml"));
}

#[test]
fn last_wins_keeps_the_later_file() {
    let ctx = TestContext::new();
    write_twice(&ctx);

    ctx.cli()
        .args([
            "--pattern",
            "config.*.neon",
            "--pattern",
            "config.*.yaml",
            "--conflict-policy",
            "last-wins",
            "config",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("yaml-db"))
        .stdout(predicate::str::contains("neon-db").not());
}
