mod conv;
mod example;
mod format;
mod parser;

#[cfg(test)]
mod test;

pub use conv::parity_game_to_game;
pub use example::example_game;
pub use format::FormatSet;
pub use parser::parse_parity_game;
use solver::{Player, Priority};

/// A row of a PGSolver file.
#[derive(Debug)]
pub struct Node {
    pub id: usize,
    pub priority: Priority,
    pub player: Player,
    pub successors: Vec<usize>,
    pub name: Option<String>,
}

#[derive(Debug)]
pub struct ParityGame {
    pub start: Option<usize>,
    pub nodes: Vec<Node>,
}
