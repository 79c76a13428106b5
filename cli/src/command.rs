// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of commands typed at the prompt

use anyhow::{anyhow, Result};
use chain_reaction_core::Board;

/// A command entered by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fill the next slot of a cell
    Play(usize),
    /// Start over on an empty board
    Reset,
    /// Switch the bot on or off
    Bot(bool),
    /// Write a snapshot now
    Save,
    /// Show the command list
    Help,
    /// Leave the game
    Quit,
}

pub const HELP: &str = "\
Commands:
  <index>        fill the next slot of cell <index> (0-based, row-major)
  <row>,<col>    same, addressed by 1-based row and column
  bot on|off     let the bot play Blue
  reset          start a new game on the same grid
  save           write a snapshot now
  help           show this list
  quit           leave";

/// Parse a line of input against the current board
pub fn parse_command(input: &str, board: &Board) -> Result<Command> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "reset" | "new" => return Ok(Command::Reset),
        "save" => return Ok(Command::Save),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "bot on" => return Ok(Command::Bot(true)),
        "bot off" => return Ok(Command::Bot(false)),
        _ => {}
    }

    if let Some((row, col)) = input.split_once(',') {
        let size = board.size();
        let parse = |part: &str| match part.trim().parse::<u8>() {
            Ok(n) if (1..=size).contains(&n) => Ok(n - 1),
            _ => Err(anyhow!("Row and column must be between 1 and {}.", size)),
        };
        let (row, col) = (parse(row)?, parse(col)?);
        return board
            .index_of(row, col)
            .map(Command::Play)
            .ok_or_else(|| anyhow!("Cell {},{} is off the board.", row + 1, col + 1));
    }

    match input.parse::<usize>() {
        Ok(index) if board.contains(index) => Ok(Command::Play(index)),
        Ok(index) => Err(anyhow!(
            "Cell {} is off the board (0-{}).",
            index,
            board.cell_count() - 1
        )),
        Err(_) => Err(anyhow!("Unknown command '{}'. Type 'help' for a list.", input)),
    }
}
