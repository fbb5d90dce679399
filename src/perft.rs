use bitmove_core::perft::{divide, perft as count};
use bitmove_core::Position;

use log::info;
use separator::Separatable;

use std::io::{self, Write};
use std::time::Instant;

/// Options for a perft run from the start position.
#[derive(Copy, Clone, Debug)]
pub struct PerftArgs {
    pub depth: usize,
    pub divide: bool,
}

/// Counts move paths from the start position and writes the result to `out`.
pub fn perft<W: Write>(args: &PerftArgs, out: &mut W) -> io::Result<usize> {
    let position = Position::start_pos();
    let now = Instant::now();

    let nodes = if args.divide {
        let split = divide(&position, args.depth);
        for (mov, nodes) in &split {
            writeln!(out, "{}: {}", mov.to_uci_string(), nodes.separated_string())?;
        }
        split.iter().map(|(_, nodes)| nodes).sum()
    } else {
        count(&position, args.depth)
    };

    let elapsed = now.elapsed();
    info!(
        "{}µs to calculate perft {}",
        elapsed.as_micros().separated_string(),
        args.depth
    );

    writeln!(out, "Nodes: {}", nodes.separated_string())?;
    Ok(nodes)
}
