use itertools::Itertools;

use crate::error::GameError;
use crate::{difference, union, Set};

use super::{Game, Player, VertexId};

fn triangle() -> Game<&'static str> {
    Game::new(
        [("x", 1, Player::Eve), ("y", 2, Player::Adam), ("z", 2, Player::Eve)],
        [("x", "y"), ("y", "z"), ("z", "x"), ("z", "z")],
    )
    .unwrap()
}

fn ids(game: &Game<&'static str>, vertices: &[&'static str]) -> Set<VertexId> {
    vertices.iter().map(|v| game.vertex_of(v).unwrap()).collect()
}

#[test]
fn construction() {
    let game = triangle();
    let z = game.vertex_of(&"z").unwrap();

    assert_eq!(game.vertex_count(), 3);
    assert_eq!(game.edge_count(), 4);
    assert_eq!(*game.identity_of(z), "z");
    assert_eq!(game.priority_of(z), 2);
    assert_eq!(game.player_of(z), Player::Eve);
    assert_eq!(game.successors_of(z).collect_vec(), ids(&game, &["x", "z"]).into_iter().collect_vec());
    assert_eq!(game.predecessors_of(z).collect_vec(), ids(&game, &["y", "z"]).into_iter().collect_vec());
    assert!(game.is_total());
    assert_eq!(game.vertex_of(&"w"), None);
}

#[test]
fn duplicate_edges_are_merged() {
    let game = Game::new([(0, 0, Player::Eve)], [(0, 0), (0, 0), (0, 0)]).unwrap();

    assert_eq!(game.edge_count(), 1);
    assert_eq!(game.successors_of(VertexId(0)).count(), 1);
}

#[test]
fn unknown_vertex() {
    let err = Game::new([('a', 0, Player::Eve)], [('a', 'a'), ('a', 'b')]).unwrap_err();

    assert_eq!(err, GameError::UnknownVertex { from: "'a'".into(), to: "'b'".into() });
}

#[test]
fn duplicate_vertex() {
    let err = Game::new([('a', 0, Player::Eve), ('a', 1, Player::Adam)], [('a', 'a')]).unwrap_err();

    assert_eq!(err, GameError::DuplicateVertex { vertex: "'a'".into() });
}

#[test]
fn non_total() {
    let vertices = [('a', 0, Player::Eve), ('b', 1, Player::Adam)];

    let game = Game::new(vertices, [('a', 'b')]).unwrap();
    assert!(!game.is_total());
    assert_eq!(game.dead_ends().collect_vec(), [VertexId(1)]);

    let err = Game::new_total(vertices, [('a', 'b')]).unwrap_err();
    assert_eq!(err, GameError::NonTotal { vertex: "'b'".into() });
    assert_eq!(err.to_string(), "vertex 'b' has no outgoing edge");
}

#[test]
fn subgame_drops_touching_edges() {
    let game = triangle();
    let full = game.full();

    assert_eq!(full.edges().count(), 4);
    assert_eq!(full.max_priority(), Some(2));
    assert_eq!(full.vertices_with_priority(2), ids(&game, &["y", "z"]));

    let removed = ids(&game, &["y"]);
    let subgame = full.without(&removed);
    let x = game.vertex_of(&"x").unwrap();
    let z = game.vertex_of(&"z").unwrap();

    assert_eq!(subgame.len(), 2);
    assert!(!subgame.contains(game.vertex_of(&"y").unwrap()));
    assert_eq!(subgame.edges().sorted().collect_vec(), [(z, x), (z, z)]);
    assert!(subgame.edges().all(|(u, v)| !removed.contains(&u) && !removed.contains(&v)));
    assert_eq!(subgame.successors_of(x).count(), 0);
    assert_eq!(subgame.predecessors_of(z).collect_vec(), [z]);

    let empty = subgame.without(subgame.vertices());
    assert!(empty.is_empty());
    assert_eq!(empty.max_priority(), None);
    assert_eq!(empty.edges().count(), 0);
}

#[test]
fn set_algebra() {
    let a = [1, 2, 3].into_iter().collect::<Set<_>>();
    let b = [3, 4].into_iter().collect::<Set<_>>();

    assert_eq!(difference(&a, &b), [1, 2].into_iter().collect::<Set<_>>());
    assert_eq!(difference(&b, &a), [4].into_iter().collect::<Set<_>>());
    assert_eq!(union(&a, &b), [1, 2, 3, 4].into_iter().collect::<Set<_>>());
    assert_eq!(union(&a, &Set::default()), a);
}
