//! Scripted input - replays canned lines, then reports the stream closed

use crate::domain::ports::{InputLine, PlayerInput};
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl PlayerInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputLine> {
        self.prompts.push(prompt.to_string());
        Ok(match self.lines.pop_front() {
            Some(line) => InputLine::Line(line),
            None => InputLine::Closed,
        })
    }
}
