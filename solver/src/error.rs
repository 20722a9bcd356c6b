use thiserror::Error;

/// Reasons why a [`Game`](crate::Game) cannot be built from its vertices and edges.
///
/// Vertex identities are rendered with their `Debug` representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("edge {from} -> {to} references a vertex that is not part of the game")]
    UnknownVertex { from: String, to: String },

    #[error("vertex {vertex} is declared more than once")]
    DuplicateVertex { vertex: String },

    #[error("vertex {vertex} has no outgoing edge")]
    NonTotal { vertex: String },
}
