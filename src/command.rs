//! Parsing of the command stream driving the simulation.
//!
//! The stream is a sequence of records made up of three whitespace-separated
//! tokens: a single-character action code, a process id and a memory amount.
//! Line breaks carry no meaning, a record may span multiple lines.
use crate::error::Error;
use crate::run::ProcessId;

use std::collections::VecDeque;
use std::io::BufRead;

/// The action of a single [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `A`: allocate memory for a process.
    Allocate,
    /// `R`: release the memory of a process.
    Release,
    /// `P`: list all runs ordered by size.
    Print,
    /// `Z`: reboot, i.e. release all memory at once.
    Reboot,
    /// `S`: stop the simulation.
    Stop,
}
impl Action {
    /// Look up the action for an action code.
    ///
    /// Returns `None` for unknown codes, including codes longer than one
    /// character.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Self::Allocate),
            "R" => Some(Self::Release),
            "P" => Some(Self::Print),
            "Z" => Some(Self::Reboot),
            "S" => Some(Self::Stop),
            _ => None,
        }
    }

    /// The action code of this action.
    pub const fn code(self) -> char {
        match self {
            Self::Allocate => 'A',
            Self::Release => 'R',
            Self::Print => 'P',
            Self::Reboot => 'Z',
            Self::Stop => 'S',
        }
    }
}

/// A single parsed record of the command stream.
///
/// Fields missing at the very end of the stream are read as `0`. The amount is
/// only parsed for [`Action::Allocate`]; the other actions accept any token in
/// its place and read it as `0`, if it is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub pid: ProcessId,
    /// The requested number of bytes, only meaningful for [`Action::Allocate`].
    pub amount: i64,
}

/// Reads [`Command`]s from a buffered reader.
///
/// The reader yields `Err` once on malformed input and should not be polled
/// afterwards. The end of the stream ends the iteration normally, a last record
/// cut short after its action code is still yielded.
pub struct CommandReader<R> {
    reader: R,
    tokens: VecDeque<String>,
    record: usize,
}
impl<R: BufRead> CommandReader<R> {
    /// Create a command reader over the given input.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tokens: VecDeque::new(),
            record: 0,
        }
    }

    /// Obtain the next token, reading further lines as necessary.
    fn next_token(&mut self) -> Result<Option<String>, Error> {
        let mut line = String::new();
        while self.tokens.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.tokens.pop_front())
    }

    fn read_command(&mut self) -> Result<Option<Command>, Error> {
        let Some(code) = self.next_token()? else {
            return Ok(None);
        };
        self.record += 1;

        let action = Action::from_code(&code).ok_or(Error::UnknownAction(code))?;
        let pid = match self.next_token()? {
            Some(token) => self.number(token, "process id")?,
            None => 0,
        };
        let amount = match self.next_token()? {
            Some(token) if action == Action::Allocate => self.number(token, "amount")?,
            Some(token) => token.parse().unwrap_or(0),
            None => 0,
        };
        Ok(Some(Command {
            action,
            pid,
            amount,
        }))
    }

    fn number<T: std::str::FromStr>(&self, token: String, field: &'static str) -> Result<T, Error> {
        token.parse().map_err(|_| Error::InvalidNumber {
            record: self.record,
            field,
            token,
        })
    }
}
impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<Command, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_command().transpose()
    }
}
