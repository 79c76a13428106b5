// SPDX-License-Identifier: MIT OR Apache-2.0

use chain_reaction_cli::session::{load_snapshot_file, save_snapshot};
use chain_reaction_cli::{parse_command, Command, Flow, Session};
use chain_reaction_core::{Color, GameState, GridSize};
use std::fs;
use tempfile::tempdir;

fn new_game(size: u8) -> GameState {
    GameState::new(GridSize::new(size).unwrap())
}

fn message(flow: Flow) -> String {
    match flow {
        Flow::Continue(message) => message,
        Flow::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn bot_answers_human_moves() {
    let mut session = Session::new(new_game(3), None);
    message(session.execute(Command::Bot(true)).unwrap());

    assert_eq!(session.run_bot().unwrap(), None, "red moves first");
    message(session.execute(Command::Play(4)).unwrap());

    let reply = session.run_bot().unwrap().expect("bot should move");
    assert!(reply.starts_with("Bot chooses cell"));
    assert!(reply.contains("Blue played cell"));
    assert_eq!(session.state().current(), Color::First);
    assert_eq!(session.state().moves().len(), 2);
}

#[test]
fn full_cell_is_reported_not_fatal() {
    let mut session = Session::new(new_game(2), None);
    for _ in 0..4 {
        message(session.execute(Command::Play(0)).unwrap());
    }
    let current = session.state().current();
    let reply = message(session.execute(Command::Play(0)).unwrap());
    assert_eq!(reply, "Cell 0 is already full, pick another.");
    assert_eq!(session.state().current(), current);
}

#[test]
fn autosave_and_resume() {
    let dir = tempdir().unwrap();
    for name in ["game.json", "game.cbor"] {
        let path = dir.path().join(name);
        let mut session = Session::new(new_game(4), Some(path.clone()));
        for line in ["5", "5", "2,2", "bot on"] {
            let command = parse_command(line, session.state().board()).unwrap();
            message(session.execute(command).unwrap());
        }

        let restored = load_snapshot_file(&path).expect("snapshot should load");
        assert_eq!(restored.board(), session.state().board());
        assert_eq!(restored.current(), Color::Second);
        assert!(restored.bot_enabled());
    }
}

#[test]
fn malformed_snapshot_is_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"board":[],"currentColor":"red","gridSize":4}"#).unwrap();
    assert!(load_snapshot_file(&path).is_none());
    assert!(load_snapshot_file(&dir.path().join("missing.json")).is_none());
}

#[test]
fn save_writes_readable_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut game = new_game(2);
    game.play(1).unwrap();
    save_snapshot(&path, &game).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"currentColor\":\"blue\""));
    assert!(text.contains("[[null,null,null,null],[\"red\",null,null,null],"));
}

#[test]
fn reset_and_quit() {
    let mut session = Session::new(new_game(2), None);
    message(session.execute(Command::Play(3)).unwrap());
    message(session.execute(Command::Reset).unwrap());
    assert_eq!(session.state(), &new_game(2));
    assert_eq!(session.execute(Command::Quit).unwrap(), Flow::Quit);
}
