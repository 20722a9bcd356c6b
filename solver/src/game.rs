use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::error::GameError;
use crate::index::{new_index, IndexedSet, IndexedVec};
use crate::Set;

#[cfg(test)]
mod test;

new_index!(pub index VertexId);

pub type Priority = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Wins plays whose highest recurring priority is even.
    Eve,
    /// Wins plays whose highest recurring priority is odd.
    Adam,
}

impl Player {
    pub fn of_priority(priority: Priority) -> Player {
        match priority % 2 {
            0 => Player::Eve,
            _ => Player::Adam,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Eve => Player::Adam,
            Player::Adam => Player::Eve,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Eve => f.write_str("Eve"),
            Player::Adam => f.write_str("Adam"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct VertexInfo {
    priority: Priority,
    player: Player,
}

/// An immutable parity game graph.
///
/// Vertices are identified by values of type `V`, which are interned into dense
/// [`VertexId`]s in declaration order. Equality of vertices only looks at the
/// identity, priority and owner are kept in a side table.
#[derive(Clone, Debug)]
pub struct Game<V> {
    identities: IndexedSet<VertexId, V>,
    info: IndexedVec<VertexId, VertexInfo>,
    successors: IndexedVec<VertexId, Vec<VertexId>>,
    predecessors: IndexedVec<VertexId, Vec<VertexId>>,
    edge_count: usize,
}

impl<V: Eq + Hash + Debug> Game<V> {
    /// Builds a game from `(identity, priority, owner)` triples and `(source, target)` pairs.
    ///
    /// Repeated edges are merged. Vertices without successors are accepted, the
    /// attractor of the opponent of their owner always contains them.
    pub fn new<VS, ES>(vertices: VS, edges: ES) -> Result<Self, GameError>
    where
        VS: IntoIterator<Item = (V, Priority, Player)>,
        ES: IntoIterator<Item = (V, V)>,
    {
        let mut identities = IndexedSet::<VertexId, V>::default();
        let mut info = IndexedVec::<VertexId, VertexInfo>::new();
        for (vertex, priority, player) in vertices {
            let (id, is_new) = identities.insert_full(vertex);
            if !is_new {
                return Err(GameError::DuplicateVertex { vertex: format!("{:?}", identities[id]) });
            }
            info.push(VertexInfo { priority, player });
        }

        let mut successors = info.iter().map(|_| Vec::new()).collect::<IndexedVec<_, _>>();
        let mut predecessors = info.iter().map(|_| Vec::new()).collect::<IndexedVec<_, _>>();
        let mut seen = Set::default();
        for (from, to) in edges {
            let (Some(u), Some(v)) = (identities.get_index_of(&from), identities.get_index_of(&to))
            else {
                return Err(GameError::UnknownVertex {
                    from: format!("{from:?}"),
                    to: format!("{to:?}"),
                });
            };

            if seen.insert((u, v)) {
                successors[u].push(v);
                predecessors[v].push(u);
            }
        }

        Ok(Game { identities, info, successors, predecessors, edge_count: seen.len() })
    }

    /// Like [`Game::new`], but also rejects games where some vertex has no successor.
    pub fn new_total<VS, ES>(vertices: VS, edges: ES) -> Result<Self, GameError>
    where
        VS: IntoIterator<Item = (V, Priority, Player)>,
        ES: IntoIterator<Item = (V, V)>,
    {
        let game = Self::new(vertices, edges)?;
        if let Some(v) = game.dead_ends().next() {
            return Err(GameError::NonTotal { vertex: format!("{:?}", game.identity_of(v)) });
        }
        Ok(game)
    }

    pub fn vertex_of(&self, identity: &V) -> Option<VertexId> {
        self.identities.get_index_of(identity)
    }
}

impl<V> Game<V> {
    pub fn vertex_count(&self) -> usize {
        self.info.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + ExactSizeIterator {
        self.info.indexes()
    }

    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.successors.enumerate().flat_map(|(u, succs)| succs.iter().map(move |&v| (u, v)))
    }

    pub fn identity_of(&self, v: VertexId) -> &V {
        &self.identities[v]
    }

    pub fn priority_of(&self, v: VertexId) -> Priority {
        self.info[v].priority
    }

    pub fn player_of(&self, v: VertexId) -> Player {
        self.info[v].player
    }

    pub fn successors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.successors[v].iter().copied()
    }

    pub fn predecessors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.predecessors[v].iter().copied()
    }

    pub fn dead_ends(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.successors.enumerate().filter(|(_, succs)| succs.is_empty()).map(|(v, _)| v)
    }

    /// Whether every vertex has at least one successor.
    pub fn is_total(&self) -> bool {
        self.dead_ends().next().is_none()
    }

    /// The subgame containing every vertex of this game.
    pub fn full(&self) -> SubGame<'_, V> {
        SubGame { game: self, vertices: self.vertices().collect() }
    }

    pub fn identities<'a>(&'a self, vertices: &'a Set<VertexId>) -> Vec<&'a V> {
        vertices.iter().map(|&v| self.identity_of(v)).collect()
    }
}

/// The part of a [`Game`] induced by a subset of its vertices.
///
/// Edges are never stored: an edge of the game belongs to the subgame exactly
/// when both of its endpoints do.
#[derive(Clone, Debug)]
pub struct SubGame<'a, V> {
    game: &'a Game<V>,
    vertices: Set<VertexId>,
}

impl<'a, V> SubGame<'a, V> {
    pub fn game(&self) -> &'a Game<V> {
        self.game
    }

    pub fn vertices(&self) -> &Set<VertexId> {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    pub fn successors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let vertices = &self.vertices;
        self.game.successors_of(v).filter(move |w| vertices.contains(w))
    }

    pub fn predecessors_of(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let vertices = &self.vertices;
        self.game.predecessors_of(v).filter(move |u| vertices.contains(u))
    }

    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.iter().flat_map(move |&u| self.successors_of(u).map(move |v| (u, v)))
    }

    pub fn max_priority(&self) -> Option<Priority> {
        self.vertices.iter().map(|&v| self.game.priority_of(v)).max()
    }

    pub fn vertices_with_priority(&self, priority: Priority) -> Set<VertexId> {
        self.vertices.iter().copied().filter(|&v| self.game.priority_of(v) == priority).collect()
    }

    /// Removes `removed` together with every edge touching it.
    pub fn without(&self, removed: &Set<VertexId>) -> SubGame<'a, V> {
        SubGame { game: self.game, vertices: difference(&self.vertices, removed) }
    }
}

/// Elements of `a` that are not in `b`.
pub fn difference<T: Clone + Eq + Hash>(a: &Set<T>, b: &Set<T>) -> Set<T> {
    a.iter().filter(|x| !b.contains(*x)).cloned().collect()
}

/// Elements of `a` followed by the elements of `b` that are not in `a`.
pub fn union<T: Clone + Eq + Hash>(a: &Set<T>, b: &Set<T>) -> Set<T> {
    a.iter().chain(b).cloned().collect()
}
