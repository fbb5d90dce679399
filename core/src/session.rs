use crate::error::{Error, Result};
use crate::mov::Move;
use crate::position::{Grid, Piece, Position, Square};

use log::{debug, info};

/// One game, addressed the way outside callers see the board: pieces by their
/// two-letter code and squares by (row, column), with row 0 on White's side.
#[derive(Clone, Debug, Default)]
pub struct Session {
    position: Position,
}

impl Session {
    /// A new game from the standard starting position.
    pub fn new() -> Self {
        Self {
            position: Position::start_pos(),
        }
    }

    /// A session continuing from an arbitrary position.
    pub fn from_position(position: Position) -> Self {
        Self { position }
    }

    /// Throws the current game away and starts over.
    pub fn reset(&mut self) {
        info!("starting a new game");
        self.position = Position::start_pos();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Where the piece `code` standing on (`row`, `col`) may move, as (row, column)
    /// pairs.
    pub fn moves(&self, code: &str, row: u8, col: u8) -> Result<Vec<(u8, u8)>> {
        let piece: Piece = code.parse()?;
        let sq = Square::from_row_col(row, col)?;

        let dests: Vec<(u8, u8)> = self
            .position
            .generate(piece, sq)
            .map(Square::to_row_col)
            .collect();
        debug!("{} on {}: {} destinations", code, sq, dests.len());
        Ok(dests)
    }

    /// Moves the piece `code` from (`row`, `col`) to (`new_row`, `new_col`) and
    /// returns the resulting board.
    pub fn place(&mut self, code: &str, row: u8, col: u8, new_row: u8, new_col: u8) -> Result<Grid> {
        let piece: Piece = code.parse()?;
        let orig = Square::from_row_col(row, col)?;
        let dest = Square::from_row_col(new_row, new_col)?;

        self.position.play(Move::new(piece, orig, dest))?;
        Ok(self.position.grid())
    }

    /// Loading a position from a text description is not supported.
    pub fn import(&mut self, description: &str) -> Result<()> {
        debug!("import of {} bytes refused", description.len());
        Err(Error::ImportUnsupported)
    }
}
