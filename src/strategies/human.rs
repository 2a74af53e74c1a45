//! A person choosing moves at a terminal

use std::{
    cell::{Ref, RefCell},
    io::{self, BufRead, StdinLock, Stdout, Write},
    rc::Rc,
};

use tracing::warn;

use crate::{Error, Result, ports::Strategy, tictactoe::BoardState};

/// One line-based terminal shared by every human side and by the prompts
/// around the game.
///
/// Clones share the same reader and writer, so standard input is locked once
/// for the whole program no matter how many humans are playing.
pub struct Console<R, W> {
    reader: Rc<RefCell<R>>,
    writer: Rc<RefCell<W>>,
}

impl Console<StdinLock<'static>, Stdout> {
    /// The process terminal: locked standard input, standard output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Rc::new(RefCell::new(reader)),
            writer: Rc::new(RefCell::new(writer)),
        }
    }

    /// Write `text` and flush it straight away
    pub fn write(&self, text: &str) -> Result<()> {
        let mut writer = self.writer.borrow_mut();
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io("write prompt", e))
    }

    /// Show `prompt` and read one answer, without its line ending.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt)?;
        let mut line = String::new();
        let read = self
            .reader
            .borrow_mut()
            .read_line(&mut line)
            .map_err(|e| Error::io("read answer", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Everything written so far, for writers that keep it
    pub fn output(&self) -> Ref<'_, W> {
        self.writer.borrow()
    }
}

impl<R, W> Clone for Console<R, W> {
    fn clone(&self) -> Self {
        Self {
            reader: Rc::clone(&self.reader),
            writer: Rc::clone(&self.writer),
        }
    }
}

/// Reads cell numbers 1-9 (row-major, top left first) from a [`Console`].
///
/// Unparsable, out-of-range and occupied answers are reported and asked
/// again; end of input is an error.
pub struct HumanStrategy<R, W> {
    name: String,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub fn new(name: impl Into<String>, console: Console<R, W>) -> Self {
        Self {
            name: name.into(),
            console,
        }
    }

    fn parse_answer(state: &BoardState, answer: &str) -> std::result::Result<usize, String> {
        let number: usize = answer
            .parse()
            .map_err(|_| format!("'{answer}' is not a cell number"))?;
        if !(1..=9).contains(&number) {
            return Err(format!("cell {number} is off the board, pick 1-9"));
        }
        let position = number - 1;
        if !state.is_empty(position) {
            return Err(format!("cell {number} is already taken"));
        }
        Ok(position)
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        if state.is_terminal() {
            return Err(Error::NoValidMoves);
        }

        loop {
            let prompt = format!("{} ({}) - choose a cell 1-9: ", self.name, state.to_move);
            let Some(answer) = self.console.ask(&prompt)? else {
                return Err(Error::InputClosed {
                    name: self.name.clone(),
                });
            };

            match Self::parse_answer(state, &answer) {
                Ok(position) => return Ok(position),
                Err(message) => {
                    warn!(player = %self.name, input = %answer, "rejected move");
                    self.console.write(&format!("{message}\n"))?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
