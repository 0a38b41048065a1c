//! End-to-end session runs over seeded generators and scripted input.

use std::io::Cursor;

use oxo::{Error, Outcome, Player, Session, Turn};
use rand::{SeedableRng, rngs::StdRng};

/// Every cell named twice: whichever cells the machine has already taken
/// are skipped through the occupied-cell re-prompt, and a fresh line always
/// remains for every still-empty cell.
fn full_script() -> String {
    let mut script = String::new();
    for _ in 0..2 {
        for x in 1..=3 {
            for y in 1..=3 {
                script.push_str(&format!("{x} {y}\n"));
            }
        }
    }
    script
}

#[test]
fn scripted_games_reach_an_outcome() {
    for seed in 0..10 {
        let mut output = Vec::new();
        let mut session = Session::new(
            StdRng::seed_from_u64(seed),
            Cursor::new(full_script()),
            &mut output,
        );
        let outcome = session.play().expect("scripted session should finish");
        let plays = session.board().plays();
        drop(session);

        assert!((5..=9).contains(&plays), "game ended after {plays} plays");

        let text = String::from_utf8(output).expect("session output is UTF-8");
        assert!(text.contains("---+---+---"));
        assert!(text.contains("Computer says: ("));
        let closing = match outcome {
            Outcome::Draw => "The grid is full. Nobody wins.",
            Outcome::MachineWin => "The machine wins.",
            Outcome::HumanWin => "The puny human wins.",
        };
        assert!(text.contains(closing), "missing closing line for {outcome:?}");
    }
}

#[test]
fn human_moves_echo_with_one_based_coordinates() {
    let mut output = Vec::new();
    let mut session = Session::with_roles(
        Player::Nought,
        Turn::Human,
        StdRng::seed_from_u64(42),
        Cursor::new(full_script()),
        &mut output,
    );
    session.play().expect("scripted session should finish");
    drop(session);

    let text = String::from_utf8(output).expect("session output is UTF-8");
    // The script opens at (1,1), which is always empty on the human's
    // first turn.
    assert!(text.contains("Puny human played: (1,1)"));
    assert!(text.contains("Please insert a valid pair of coordinates: "));
}

#[test]
fn running_out_of_input_mid_game_is_reported() {
    let mut output = Vec::new();
    let mut session = Session::with_roles(
        Player::Cross,
        Turn::Machine,
        StdRng::seed_from_u64(7),
        Cursor::new("1 1\n".to_string()),
        &mut output,
    );
    let err = session.play().expect_err("input cannot cover a whole game");
    assert!(matches!(err, Error::InputExhausted));
}
