//! Scripted end-to-end sessions through in-memory I/O.

use std::io::Cursor;
use tictactoe_console::GameSession;

/// Runs a whole session against the scripted input and returns the result
/// plus the emitted transcript.
fn run_session(script: &str) -> (anyhow::Result<()>, String) {
    let mut out = Vec::new();
    let result = GameSession::new(Cursor::new(script.as_bytes().to_vec()), &mut out).run();
    (result, String::from_utf8(out).expect("utf-8 transcript"))
}

#[test]
fn x_wins_a_clean_game() {
    // X takes the top row on turns 1, 3, 5; O plays the middle row.
    let (result, transcript) = run_session("1\n4\n2\n5\n3\nn\n");
    result.expect("session runs to completion");

    assert!(transcript.contains("Let's play Tic-Tac-Toe!"));
    assert!(transcript.contains("Player X, pick a square:"));
    assert!(transcript.contains("Player O, pick a square:"));
    assert!(transcript.contains(" 1 | 2 | 3 "));
    assert!(transcript.contains("Player X wins!"));
    assert!(transcript.contains(" X | X | X "));
    assert!(transcript.contains("Play again? (Y/N):"));
    assert!(transcript.trim_end().ends_with("Thanks for playing!"));
}

#[test]
fn full_board_without_a_line_ends_in_a_tie() {
    let (result, transcript) = run_session("1\n2\n3\n6\n4\n7\n5\n9\n8\nn\n");
    result.expect("session runs to completion");

    assert!(transcript.contains("The game ends in a tie!"));
    assert!(!transcript.contains("wins!"));
}

#[test]
fn malformed_input_reprompts_without_consuming_a_turn() {
    let (result, transcript) = run_session("abc\n0\n10\n1\n4\n2\n5\n3\nn\n");
    result.expect("session runs to completion");

    assert_eq!(
        transcript
            .matches("Invalid input! Please pick a square:")
            .count(),
        3
    );
    assert!(transcript.contains("Player X wins!"));
}

#[test]
fn occupied_square_reprompts_the_same_player() {
    let (result, transcript) = run_session("1\n1\n4\n2\n5\n3\nn\n");
    result.expect("session runs to completion");

    assert!(transcript.contains("Square has already been picked! Pick another square:"));
    // O's retried pick lands on square 4, so X still wins the top row.
    assert!(transcript.contains("Player X wins!"));
}

#[test]
fn affirmative_answer_replays_with_a_fresh_board() {
    let (result, transcript) = run_session("1\n4\n2\n5\n3\nY\n1\n4\n2\n5\n3\nn\n");
    result.expect("session runs to completion");

    assert_eq!(transcript.matches("Let's play Tic-Tac-Toe!").count(), 2);
    assert_eq!(transcript.matches("Player X wins!").count(), 2);
    assert_eq!(transcript.matches("Thanks for playing!").count(), 1);
}

#[test]
fn any_other_answer_declines_the_replay() {
    let (result, transcript) = run_session("1\n4\n2\n5\n3\nyes please\n");
    result.expect("session runs to completion");

    assert_eq!(transcript.matches("Let's play Tic-Tac-Toe!").count(), 1);
    assert!(transcript.trim_end().ends_with("Thanks for playing!"));
}

#[test]
fn input_closing_mid_game_is_an_error() {
    let (result, transcript) = run_session("1\n4\n");
    assert!(result.is_err());
    assert!(transcript.contains("Player X, pick a square:"));
}
