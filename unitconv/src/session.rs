//! Interactive conversion loop
//!
//! One cycle is Prompt -> Read -> Dispatch -> Prompt. Every per-line error
//! is printed and the loop goes back to Prompt; only I/O errors end it
//! early.

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::dispatch;

pub const PROMPT: &str = "Enter what you want to convert (or exit): ";
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Printed without a newline before each read
    pub prompt: String,
    /// Input that ends the loop, compared exactly
    pub exit_command: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            exit_command: EXIT_COMMAND.to_string(),
        }
    }
}

/// Loop states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Prompt,
    Read,
    Dispatch(String),
    Exit,
}

/// A conversion loop over any line source and sink
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    cycles: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            config: SessionConfig::default(),
            cycles: 0,
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Run until the exit command or end of input
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::Prompt;
        while state != State::Exit {
            state = self.step(state)?;
        }
        debug!(cycles = self.cycles, "session finished");
        Ok(())
    }

    /// Perform one transition
    pub fn step(&mut self, state: State) -> io::Result<State> {
        match state {
            State::Prompt => {
                write!(self.output, "{}", self.config.prompt)?;
                self.output.flush()?;
                Ok(State::Read)
            }
            State::Read => {
                let mut line = String::new();
                if self.input.read_line(&mut line)? == 0 {
                    debug!("end of input");
                    return Ok(State::Exit);
                }
                let line = strip_line_ending(&line);
                if line == self.config.exit_command {
                    return Ok(State::Exit);
                }
                Ok(State::Dispatch(line.to_string()))
            }
            State::Dispatch(line) => {
                let message = match dispatch(&line) {
                    Ok(result) => result.to_string(),
                    Err(e) => e.to_string(),
                };
                writeln!(self.output, "{}", message)?;
                self.output.flush()?;
                self.cycles += 1;
                Ok(State::Prompt)
            }
            State::Exit => Ok(State::Exit),
        }
    }

    /// Number of lines dispatched so far
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
