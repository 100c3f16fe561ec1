use assert_cmd::Command;

pub fn retag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("retag").unwrap();
    cmd.env_remove("RETAG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
