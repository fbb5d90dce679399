use bitmove_core::Grid;

use separator::Separatable;

use std::io::{self, Write};

/// Represents a response written back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Res {
    Moves(Vec<(u8, u8)>),
    Grid(Grid),
    Text(String),
    Nodes(usize),
    Ok,
    Quit,
    Error(String),
}

impl Res {
    pub fn emit<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Res::Moves(dests) => {
                write!(out, "moves")?;
                for (row, col) in dests {
                    write!(out, " {},{}", row, col)?;
                }
                writeln!(out)
            }
            Res::Grid(grid) => {
                for row in grid {
                    let labels: Vec<&str> = row
                        .iter()
                        .map(|label| if label.is_empty() { ".." } else { *label })
                        .collect();
                    writeln!(out, "{}", labels.join(" "))?;
                }
                Ok(())
            }
            Res::Text(text) => write!(out, "{}", text),
            Res::Nodes(nodes) => writeln!(out, "nodes {}", nodes.separated_string()),
            Res::Ok => writeln!(out, "ok"),
            Res::Quit => writeln!(out, "exiting"),
            Res::Error(msg) => writeln!(out, "error: {}", msg),
        }
    }
}
