//! Scripted sessions fed through `Session::run`.

use regicide_core::{Color, Flank, Square};
use regicide_play::{ActionKind, EndReason, Outcome, Session, SessionConfig};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn run(script: &str, config: SessionConfig) -> (Session, Outcome, String) {
    let mut session = Session::new(config);
    let mut output = Vec::new();
    let outcome = session.run(script.as_bytes(), &mut output).unwrap();
    (session, outcome, String::from_utf8(output).unwrap())
}

#[test]
fn fools_mate_ends_the_session() {
    let config = SessionConfig {
        white_name: "Ada".to_string(),
        black_name: "Grace".to_string(),
        show_board: true,
    };
    let script = "M F2 F3\nM E7 E5\nM G2 G4\nM D8 H4\nM A2 A3\n";
    let (session, outcome, text) = run(script, config);

    assert_eq!(
        outcome,
        Outcome {
            winner: Some(Color::Black),
            reason: EndReason::Checkmate,
        }
    );
    assert_eq!(session.history().len(), 4, "input after mate is never read");
    assert!(text.contains("Black wins by checkmate. The winner is Grace."));
    assert!(text.contains("==== turn 4: Grace (Black) to play ===="));
    assert!(text.contains("┏━━━┳"));
}

#[test]
fn check_and_en_passant_notices() {
    let config = SessionConfig {
        show_board: false,
        ..SessionConfig::default()
    };
    let script = "M E2 E4\nM A7 A6\nM E4 E5\nM D7 D5\nGP\nDP\nH\n";
    let (session, outcome, text) = run(script, config);

    assert_eq!(outcome.reason, EndReason::InputClosed);
    assert!(text.contains("An en passant capture is available"));
    assert!(text.contains("en passant is not possible from the left flank, only from the right flank"));
    assert_eq!(
        session.history().last().map(|a| a.kind),
        Some(ActionKind::EnPassant {
            flank: Flank::Right,
            from: sq("E5"),
            to: sq("D6"),
        })
    );
    assert!(text.contains("==== history ===="));
    assert!(text.contains("turn 5, White: takes en passant from the right, E5 to D6"));
    assert!(session.game().board().piece(sq("D5")).is_none());
}

#[test]
fn castling_commands() {
    let config = SessionConfig {
        show_board: false,
        ..SessionConfig::default()
    };
    let script = "\
        M G1 F3\nM G8 F6\n\
        M E2 E3\nM E7 E6\n\
        M F1 E2\nM F8 E7\n\
        GR\nPR\npr\n";
    let (session, _, text) = run(script, config);

    assert!(text.contains("White cannot castle queen side"));
    let kinds: Vec<_> = session.history().iter().map(|a| (a.player, a.kind)).collect();
    assert_eq!(
        &kinds[6..],
        &[
            (Color::White, ActionKind::CastleKingSide),
            (Color::Black, ActionKind::CastleKingSide),
        ]
    );
    assert_eq!(session.game().king_square(Color::White), Some(Square::G1));
    assert_eq!(session.game().king_square(Color::Black), Some(Square::G8));
}

#[test]
fn abandon_is_recorded() {
    let config = SessionConfig {
        show_board: false,
        ..SessionConfig::default()
    };
    let (session, outcome, text) = run("M D2 D4\nA\n", config);
    assert_eq!(
        outcome,
        Outcome {
            winner: Some(Color::White),
            reason: EndReason::Abandon,
        }
    );
    assert_eq!(session.history().last().map(|a| a.kind), Some(ActionKind::Abandon));
    assert!(text.contains("Black abandons, White wins. The winner is White."));
}
