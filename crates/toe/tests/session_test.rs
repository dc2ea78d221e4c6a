//! End-to-end tests for the console session.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashSet, VecDeque};
use std::io::{Cursor, Write};
use toe::{GameConfig, HumanPlayer, MOVE_PROMPT, Player, RandomPlayer, Roster, Session};
use toe_rules::{Board, Coord, GameState, Marker, Outcome, PlayerKind};

/// Computer stand-in that plays a fixed list of squares.
struct Scripted {
    moves: VecDeque<Coord>,
}

impl Scripted {
    fn new(moves: &[&str]) -> Self {
        Self {
            moves: moves.iter().map(|m| Coord::parse(m).unwrap()).collect(),
        }
    }
}

impl Player for Scripted {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Automated
    }

    fn get_move(&mut self, _board: &Board, name: &str, out: &mut dyn Write) -> Result<Coord> {
        let coord = self
            .moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))?;
        writeln!(out, "{name} (Computer) played {coord}!")?;
        Ok(coord)
    }
}

fn session(
    first: PlayerKind,
    input: &'static str,
    computer: impl Player + 'static,
) -> Session<Vec<u8>> {
    Session::new(
        GameState::new(first),
        Roster::default(),
        HumanPlayer::new(Cursor::new(input)),
        computer,
        Vec::new(),
    )
}

fn output(session: &Session<Vec<u8>>) -> String {
    String::from_utf8(session.output().clone()).unwrap()
}

#[test]
fn test_human_wins_top_row() {
    let mut session = session(
        PlayerKind::Human,
        "A1\nb1\nC1\n",
        Scripted::new(&["A2", "B2"]),
    );
    let outcome = session.run().unwrap();
    assert_eq!(outcome, Outcome::Win(Marker::X));

    let text = output(&session);
    assert!(!text.contains("Computer plays first"));
    assert_eq!(text.matches("Your turn, Player 1 (X).").count(), 3);
    assert_eq!(text.matches("Player 2 (O) (Computer) played").count(), 2);
    assert!(text.contains("Game over!\nPlayer 1 (X) won :0\n"));
    assert!(text.ends_with(
        "| X | X | X |  1\n-------------\n| O | O |   |  2\n-------------\n|   |   |   |  3\n-------------\n"
    ));
}

#[test]
fn test_computer_opens_and_wins() {
    let mut session = session(
        PlayerKind::Automated,
        "A1\nA2\n",
        Scripted::new(&["C1", "C2", "C3"]),
    );
    let outcome = session.run().unwrap();
    assert_eq!(outcome, Outcome::Win(Marker::X));

    let text = output(&session);
    assert!(text.starts_with("Computer plays first as Player 1 (X)\n"));
    assert!(text.contains("Your turn, Player 2 (O)."));
    assert!(text.contains("Player 1 (X) won :0"));
}

#[test]
fn test_rejected_input_reprompts() {
    let mut session = session(
        PlayerKind::Human,
        "B2\nB2\nzz\nA1\nC3\n",
        Scripted::new(&["A3", "C1"]),
    );
    // X: B2, A1, C3 wins the main diagonal.
    let outcome = session.run().unwrap();
    assert_eq!(outcome, Outcome::Win(Marker::X));

    let text = output(&session);
    assert_eq!(text.matches("Invalid move :(").count(), 2);
    assert_eq!(text.matches("Still your turn, Player 1 (X).").count(), 2);
    assert_eq!(text.matches(MOVE_PROMPT).count(), 5);
}

#[test]
fn test_tie_message() {
    // X: A1 C1 B3 C2 A3, O: B2 B1 A2 C3
    let mut session = session(
        PlayerKind::Human,
        "A1\nC1\nB3\nC2\nA3\n",
        Scripted::new(&["B2", "B1", "A2", "C3"]),
    );
    assert_eq!(session.run().unwrap(), Outcome::Tie);
    assert!(output(&session).contains("Game over!\nThere was a tie :0\n"));
    assert!(session.state().board().is_full());
}

#[test]
fn test_closed_input_stops_session() {
    let mut session = session(PlayerKind::Human, "", Scripted::new(&[]));
    assert!(session.run().is_err());
    assert_eq!(session.state().outcome(), Outcome::InProgress);
}

#[test]
fn test_random_computer_plays_to_the_end() {
    let every_square = "A1\nB1\nC1\nA2\nB2\nC2\nA3\nB3\nC3\n".repeat(9);
    let input: &'static str = Box::leak(every_square.into_boxed_str());

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::random(&mut rng);
        let config = GameConfig::default();
        let mut session = Session::new(
            state,
            config.roster(),
            HumanPlayer::new(Cursor::new(input)),
            RandomPlayer::with_max_attempts(rng, *config.max_random_attempts()),
            Vec::new(),
        );

        let outcome = session.run().unwrap();
        assert!(outcome.is_terminal(), "seed {seed}");

        let history = session.state().history();
        assert!((5..=9).contains(&history.len()), "seed {seed}");
        let unique: HashSet<Coord> = history.iter().map(|m| m.coord).collect();
        assert_eq!(unique.len(), history.len(), "seed {seed}");
    }
}

#[test]
fn test_config_file_roster() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x_name = \"Ada\"\nplayer_o_name = \"Bot\"").unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();

    let mut session = Session::new(
        GameState::new(PlayerKind::Automated),
        config.roster(),
        HumanPlayer::new(Cursor::new("A2\nB2\n")),
        Scripted::new(&["A1", "B1", "C1"]),
        Vec::new(),
    );
    session.run().unwrap();
    let text = output(&session);
    assert!(text.starts_with("Computer plays first as Ada\n"));
    assert!(text.contains("Your turn, Bot."));
    assert!(text.contains("Ada won :0"));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
#[should_panic(expected = "computer seat needs an automated player")]
fn test_seats_must_match_player_kind() {
    let _ = Session::new(
        GameState::new(PlayerKind::Human),
        Roster::default(),
        HumanPlayer::new(Cursor::new("A1\n")),
        HumanPlayer::new(Cursor::new("B1\n")),
        Vec::new(),
    );
}

#[test]
fn test_non_utf8_input_does_not_end_game() {
    let mut session = Session::new(
        GameState::new(PlayerKind::Human),
        Roster::default(),
        HumanPlayer::new(Cursor::new(&b"\xc3\x28\nA1\nB1\nC1\n"[..])),
        Scripted::new(&["A2", "B2"]),
        Vec::new(),
    );
    assert_eq!(session.run().unwrap(), Outcome::Win(Marker::X));
    let text = output(&session);
    assert_eq!(text.matches("Invalid move :(").count(), 1);
    assert!(text.contains("Player 1 (X) won :0"));
}
