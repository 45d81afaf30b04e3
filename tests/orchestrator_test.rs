//! Tests for orchestrated games between players.

use std::io::Cursor;
use tictactoe::{
    Coordinate, Game, HumanPlayer, Mark, MinimaxAgent, Orchestrator, Phase, Player, PlayerError,
    RandomAgent, SmartAgent,
};

/// Player that replays a fixed list of moves.
struct Scripted {
    name: String,
    moves: std::vec::IntoIter<Coordinate>,
}

impl Scripted {
    fn new(name: &str, moves: &[(usize, usize)]) -> Self {
        let moves: Vec<Coordinate> = moves.iter().map(|&(r, c)| Coordinate::new(r, c)).collect();
        Self {
            name: name.to_string(),
            moves: moves.into_iter(),
        }
    }
}

impl Player for Scripted {
    fn make_move(&mut self, _game: &Game) -> Result<Coordinate, PlayerError> {
        self.moves.next().ok_or(PlayerError::InputClosed)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[test]
fn test_minimax_self_play_draws() {
    let mut orchestrator = Orchestrator::new(
        Game::with_names("AI X", "AI O"),
        Box::new(MinimaxAgent::new("AI X", Mark::X)),
        Box::new(MinimaxAgent::new("AI O", Mark::O)),
    );
    let mut out = Vec::new();
    assert_eq!(orchestrator.run(&mut out).unwrap(), Phase::Draw);

    let text = String::from_utf8(out).unwrap();
    assert!(text.trim_end().ends_with("Draw"));
    assert!(text.contains("Current player: AI X"));
    assert!(text.contains("Current player: AI O"));
}

#[test]
fn test_minimax_never_loses_to_random() {
    for seed in 0..10 {
        for minimax_mark in [Mark::X, Mark::O] {
            let minimax: Box<dyn Player> = Box::new(MinimaxAgent::new("AI", minimax_mark));
            let random: Box<dyn Player> = Box::new(RandomAgent::new("Random", Some(seed)));
            let (x, o) = match minimax_mark {
                Mark::X => (minimax, random),
                Mark::O => (random, minimax),
            };
            let mut orchestrator = Orchestrator::new(Game::default(), x, o);
            let phase = orchestrator.run(&mut std::io::sink()).unwrap();
            assert_ne!(
                phase,
                Phase::Won(minimax_mark.opponent()),
                "seed {seed}, minimax as {minimax_mark}"
            );
        }
    }
}

#[test]
fn test_rejected_move_is_retried() {
    let x = Scripted::new("Alice", &[(0, 0), (1, 0), (2, 0)]);
    // Bob tries the occupied corner and an off-board cell first.
    let o = Scripted::new("Bob", &[(0, 0), (5, 5), (0, 1), (0, 2)]);
    let mut orchestrator =
        Orchestrator::new(Game::with_names("Alice", "Bob"), Box::new(x), Box::new(o));
    let mut out = Vec::new();

    assert_eq!(orchestrator.run(&mut out).unwrap(), Phase::Won(Mark::X));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Cell (0, 0) is already occupied"));
    assert!(text.contains("Cell (5, 5) is out of bounds"));
    assert!(text.trim_end().ends_with("Alice"));
    assert_eq!(orchestrator.game().history().len(), 5);
}

#[test]
fn test_human_against_minimax() {
    // Every cell once; a cell the AI already took is rejected and the next
    // line pair is read, so the script always lasts to the end of the game.
    let input = Cursor::new("1\n1\n0\n0\n0\n2\n2\n0\n2\n2\n1\n0\n1\n2\n0\n1\n2\n1\n");
    let human = HumanPlayer::new("Alice", input, std::io::sink());
    let mut orchestrator = Orchestrator::new(
        Game::with_names("Alice", "AI O"),
        Box::new(human),
        Box::new(MinimaxAgent::new("AI O", Mark::O)),
    );
    let phase = orchestrator.run(&mut std::io::sink()).unwrap();
    assert!(phase.is_terminal());
    assert_ne!(phase, Phase::Won(Mark::X));
}

#[test]
fn test_player_error_aborts() {
    let mut orchestrator = Orchestrator::new(
        Game::default(),
        Box::new(SmartAgent::new("Smart X")),
        Box::new(MinimaxAgent::new("AI O", Mark::O)),
    );
    let err = orchestrator.run(&mut std::io::sink()).unwrap_err();
    assert!(format!("{err:#}").contains("not implemented"));
    assert_eq!(orchestrator.game().phase(), Phase::InProgress);
    assert!(orchestrator.game().history().is_empty());
}
