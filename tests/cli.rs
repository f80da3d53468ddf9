//! End-to-end tests driving the wordquiz binary over piped stdin.
//!
//! Piped answers arrive effectively instantly, so a generous time budget is
//! passed to keep slow CI machines from tripping the timeout path.

use assert_cmd::Command;
use predicates::prelude::*;

fn wordquiz() -> Command {
    Command::cargo_bin("wordquiz").unwrap()
}

fn script(lines: &[&str]) -> String {
    let mut joined = lines.join("\n");
    joined.push('\n');
    joined
}

#[test]
fn failing_pass_reports_score_and_exits_from_fail_menu() {
    wordquiz()
        .args(["--no-defaults", "--time-limit", "3600"])
        .write_stdin(script(&[
            "20250001", "Kim", // greeting
            "apple", "사과", "y", "exit", // register one word
            "wrong", "wrong", // both attempts miss
            "0", // quit from the fail menu
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Word 'apple' has been registered."))
        .stdout(predicate::str::contains("You got 0 out of 1 questions right."))
        .stdout(predicate::str::contains("Exiting the quiz. Goodbye!"));
}

#[test]
fn perfect_pass_reaches_success_menu() {
    wordquiz()
        .args(["--no-defaults", "--time-limit", "3600"])
        .write_stdin(script(&[
            "20250001", "Kim",
            "apple", "사과", "y", "exit",
            "사과", // correct answer
            "0",    // quit from the success menu
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Congratulations! You answered every question correctly!",
        ))
        .stdout(predicate::str::contains("1 to delete a word"));
}

#[test]
fn default_flashcards_are_listed_with_timestamps() {
    wordquiz()
        .args(["--time-limit", "3600", "--seed", "7"])
        .write_stdin(script(&[
            "20250001", "Kim", "exit",
            // Miss all five default words (one attempt plus one retry each).
            "x", "x", "x", "x", "x", "x", "x", "x", "x", "x",
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered words:"))
        .stdout(predicate::str::contains("apple"))
        .stdout(predicate::str::contains("호랑이"))
        .stdout(predicate::str::contains("5 word(s) registered."))
        .stdout(predicate::str::contains("You got 0 out of 5 questions right."));
}
