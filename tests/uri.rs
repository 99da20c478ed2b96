use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_uri_go_simple() {
    let mut cmd = Command::cargo_bin("rover").unwrap();
    cmd.write_stdin("position startpos 6\ngo playouts 2 maxsteps 15\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bestmove"));
}

#[test]
fn test_uri_handshake() {
    let mut cmd = Command::cargo_bin("rover").unwrap();
    cmd.write_stdin("uri\nisready\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("uriok").and(predicate::str::contains("readyok")));
}

#[test]
fn test_uri_position_fen_and_move() {
    let mut cmd = Command::cargo_bin("rover").unwrap();
    cmd.write_stdin("position fen 4 1,1 0\nmove se\ngetfen\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 2,2 0,5,10"));
}

#[test]
fn test_uri_no_move_on_exhausted_board() {
    let mut cmd = Command::cargo_bin("rover").unwrap();
    cmd.write_stdin("position startpos 1\ngo\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bestmove none"));
}

#[test]
fn test_uri_unknown_command_reported_when_not_strict() {
    let mut cmd = Command::cargo_bin("rover").unwrap();
    cmd.write_stdin("setoption name strictmode value false\nfrobnicate\nisready\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("readyok"))
        .stderr(predicate::str::contains("Unknown command"));
}
