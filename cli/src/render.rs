// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use chain_reaction_core::{tally, Board, Color, GameState, MoveReport, Slot};

/// Render the board, one bracketed cell of four slots per column.
///
/// ```text
///        1      2
///  1  [RR..] [....]
///  2  [BBBB] [R...]
/// ```
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut output = String::new();

    // Column labels
    output.push_str("   ");
    for col in 1..=size {
        output.push_str(&format!(" {:^6}", col));
    }
    output.push('\n');

    for (row, cells) in board.cells().chunks(size as usize).enumerate() {
        output.push_str(&format!("{:2} ", row + 1));
        for cell in cells {
            let slots: String = cell.slots().iter().map(slot_char).collect();
            output.push_str(&format!(" [{}]", slots));
        }
        output.push('\n');
    }

    output
}

/// Single-character representation of a slot
fn slot_char(slot: &Slot) -> char {
    match slot {
        Some(Color::First) => 'R',
        Some(Color::Second) => 'B',
        None => '.',
    }
}

/// One line with the score and either the player to move or the result
pub fn render_status(state: &GameState) -> String {
    let counts = tally(state.board());
    match state.winner() {
        Some(winner) => winner.announce(&counts),
        None => format!(
            "{} to move | Red {} - Blue {} | {} empty",
            state.current(),
            counts.first,
            counts.second,
            counts.empty
        ),
    }
}

/// Describe the cells a move converted, grouped by depth
pub fn render_chain(report: &MoveReport) -> Option<String> {
    if report.converted() == 0 {
        return None;
    }

    let mut waves: Vec<Vec<usize>> = Vec::new();
    for step in report.steps.iter().skip(1) {
        if waves.len() < step.depth {
            waves.resize(step.depth, Vec::new());
        }
        waves[step.depth - 1].push(step.index);
    }

    let waves: Vec<String> = waves
        .iter()
        .map(|wave| {
            wave.iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();

    Some(format!(
        "Chain reaction from cell {}: {}",
        report.index,
        waves.join(" -> ")
    ))
}
