use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "kingrace";

#[test]
fn startup_banner() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("quit\n")
            .assert()
            .success()
            .stdout(contains("Kingrace").and(contains("Release build"))),
    );
}

#[test]
fn play_moves() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("move a2 a7\nmove b2b3\nd\nturn\nquit\n")
            .assert()
            .success()
            .stdout(
                contains("ok\n")
                    .and(contains("info string illegal move: it is black's turn"))
                    .and(contains("fen 8/R7/8/8/8/8/1BN2nbr/KBN2nbk b"))
                    .and(contains("turn black")),
            ),
    );
}

#[test]
fn finish_game() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("position fen 8/1K4k1/8/8/8/8/8/8 w\nmove b7b8\nmove g7g8\nstate\n")
            .assert()
            .success()
            .stdout(contains("state TIE").and(contains("Unsupported command").not())),
    );
}

#[test]
fn unsupported_command() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("uci\n")
            .assert()
            .success()
            .stdout(contains("info string Unsupported command: uci")),
    );
}
