//! A game session driven by text commands, one per line.
//!
//! Each line is parsed into a `Req`, handled against the owned `Session`, and
//! answered with a `Res`. A bad line is answered with an error and the session
//! carries on; only `quit` or the end of input stops it.

mod outbound;
mod parse;

pub use outbound::Res;
pub use parse::{parse, Req};

use bitmove_core::perft::perft;
use bitmove_core::Session;

use log::{debug, warn};

use std::io::{self, BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("no input")]
    NoInput,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("not a number: {0}")]
    BadNumber(String),
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
    #[error(transparent)]
    Core(#[from] bitmove_core::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Default)]
pub struct Shell {
    session: Session,
    quit: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads commands from `input` until `quit` or end of input, writing every
    /// response to `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let res = match parse(&line).and_then(|req| self.handle(req)) {
                Ok(res) => res,
                Err(err) => {
                    warn!("'{}': {}", line.trim(), err);
                    Res::Error(err.to_string())
                }
            };
            res.emit(out)?;
            out.flush()?;

            if self.quit {
                break;
            }
        }
        Ok(())
    }

    /// Carries out a single request against the session.
    pub fn handle(&mut self, req: Req) -> Result<Res, CommandError> {
        debug!("handling {:?}", req);
        let res = match req {
            Req::Moves { code, row, col } => {
                let mut dests = self.session.moves(&code, row, col)?;
                dests.sort_unstable();
                Res::Moves(dests)
            }
            Req::Place {
                code,
                row,
                col,
                new_row,
                new_col,
            } => Res::Grid(self.session.place(&code, row, col, new_row, new_col)?),
            Req::Board => Res::Grid(self.session.position().grid()),
            Req::Show => Res::Text(self.session.position().to_string()),
            Req::NewGame => {
                self.session.reset();
                Res::Ok
            }
            Req::Import(description) => {
                self.session.import(&description)?;
                Res::Ok
            }
            Req::Perft(depth) => Res::Nodes(perft(self.session.position(), depth)),
            Req::Quit => {
                self.quit = true;
                Res::Quit
            }
        };
        Ok(res)
    }
}
