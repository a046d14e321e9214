use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "chess-system";

#[test]
fn board_and_prompt() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("")
            .assert()
            .success()
            .stdout(
                contains("Chess system")
                    .and(contains("8 - - r k r - - -"))
                    .and(contains("1 - - R K R - - -"))
                    .and(contains("Source: ")),
            ),
    );
}

#[test]
fn moves_and_errors() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("c2\nc7\nb5\nj1\n")
            .assert()
            .success()
            .stdout(
                contains("Captured: r")
                    .and(contains("7 - - R r r - - -"))
                    .and(contains("there is no piece on source position b5"))
                    .and(contains("invalid chess position 'j1'")),
            ),
    );
}

#[test]
fn strict_flag() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.arg("--strict")
            .write_stdin("e1\ne5\n")
            .assert()
            .success()
            .stdout(contains("the piece on e1 can't move to e5")),
    );
}

#[test]
fn verbose_logs_moves() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.arg("--verbose")
            .env_remove("RUST_LOG")
            .write_stdin("c2\nc5\n")
            .assert()
            .success()
            .stderr(contains("performed move").and(contains("source=c2"))),
    );
}

#[test]
fn quiet_by_default() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.env_remove("RUST_LOG")
            .write_stdin("c2\nc5\n")
            .assert()
            .success()
            .stderr(contains("performed move").not()),
    );
}
