use std::process::{Command, Stdio};

#[test]
fn play_echoes_difficulty_label_as_given() {
    // closed stdin makes the human seat give up straight away
    let output = Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .args(["play", "--difficulty", "bogus", "--seed", "7"])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run tictactoe binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("Difficulty set to bogus"));
    assert!(stdout.contains("Game abandoned."));
}
