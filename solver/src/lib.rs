//! Solver for two-player parity games based on the McNaughton-Zielonka algorithm.

pub mod attractor;
mod error;
pub mod game;
pub mod index;
mod regions;
mod zielonka;


pub use attractor::attractor;
pub use error::GameError;
pub use game::{difference, union, Game, Player, Priority, SubGame, VertexId};
pub use regions::WinningRegions;
pub use zielonka::{solve, zielonka};

pub type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
pub type Map<K, V> = rustc_hash::FxHashMap<K, V>;
