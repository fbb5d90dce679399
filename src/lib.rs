//! Command-line front end for `bitmove_core`: a line-oriented game session on
//! stdin/stdout and a one-shot perft counter.

pub mod cmdline;
pub mod perft;
pub mod sess;
