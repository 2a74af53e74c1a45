//! Terminal board rendering

use std::io::Write;

use crate::{
    Error, Result,
    coordinator::GameRecord,
    ports::Observer,
    tictactoe::{BoardState, Cell, Player},
};

/// Draw the board as three rows.
///
/// Empty cells show their 1-9 number so a human knows what to type; cells of
/// `highlight` are bracketed.
pub fn render_board(state: &BoardState, highlight: Option<[usize; 3]>) -> String {
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                let mark = match state.cells[pos] {
                    Cell::Empty => char::from_digit(pos as u32 + 1, 10).unwrap_or(' '),
                    cell => cell.to_char(),
                };
                if highlight.is_some_and(|line| line.contains(&pos)) {
                    format!("[{mark}]")
                } else {
                    format!(" {mark} ")
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}

/// Prints the board after every move and announces each result.
pub struct BoardRenderer<W> {
    writer: W,
}

impl<W: Write> BoardRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| Error::io("render board", e))
    }
}

impl<W: Write + Send> Observer for BoardRenderer<W> {
    fn on_game_start(&mut self, game_num: usize) -> Result<()> {
        let board = render_board(&BoardState::new(), None);
        self.emit(&format!("\nGame {}\n\n{board}\n", game_num + 1))
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        state: &BoardState,
        position: usize,
        player: Player,
    ) -> Result<()> {
        let after = state.make_move(position)?;
        let board = render_board(&after, None);
        self.emit(&format!("{player} takes cell {}\n\n{board}\n", position + 1))
    }

    fn on_game_end(
        &mut self,
        _game_num: usize,
        record: &GameRecord,
        final_state: &BoardState,
    ) -> Result<()> {
        let mut text = String::new();
        if record.winning_line.is_some() {
            text.push_str(&render_board(final_state, record.winning_line));
            text.push('\n');
        }
        text.push_str(&format!("Result: {}\n", record.result));
        self.emit(&text)
    }
}
