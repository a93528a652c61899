use crate::harness::TestContext;

#[test]
fn list_shows_the_four_migration_commands() {
    let ctx = TestContext::new();

    ctx.cli().arg("list").assert().success().stdout("create\nmigrate\nrollback\nstatus\n");
}

#[test]
fn no_command_behaves_like_list() {
    let ctx = TestContext::new();

    ctx.cli().assert().success().stdout("create\nmigrate\nrollback\nstatus\n");
}
