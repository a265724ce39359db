//! Line-oriented input
//!
//! Reads raw bytes up to a newline so that a line which is not valid UTF-8
//! is consumed and reported instead of poisoning the next read.

use crate::domain::ports::{InputLine, PlayerInput};
use std::io::{self, BufRead, Write};

pub struct LineInput<R, W> {
    reader: R,
    /// Where prompts are written; `None` keeps the output stream clean (JSON mode)
    prompt_out: Option<W>,
}

/// Line input over the process's stdin/stdout
pub type StdinInput = LineInput<io::StdinLock<'static>, io::Stdout>;

pub fn stdin_input(show_prompts: bool) -> StdinInput {
    LineInput::new(io::stdin().lock(), show_prompts.then(io::stdout))
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt_out: Option<W>) -> Self {
        Self { reader, prompt_out }
    }

    pub fn into_prompt_out(self) -> Option<W> {
        self.prompt_out
    }
}

impl<R: BufRead, W: Write> PlayerInput for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputLine> {
        if let Some(out) = self.prompt_out.as_mut() {
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(InputLine::Closed);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }

        Ok(match String::from_utf8(buf) {
            Ok(line) => InputLine::Line(line),
            Err(_) => InputLine::Garbled,
        })
    }
}
