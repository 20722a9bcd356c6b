use solver::{Game, GameError, Player};

/// A small game where each player wins part of the vertices.
///
/// Eve wins from `a`, `d` and `e`, Adam from `b` and `c`.
pub fn example_game() -> Result<Game<char>, GameError> {
    let vertices = [
        ('a', 3, Player::Eve),
        ('b', 3, Player::Adam),
        ('c', 2, Player::Eve),
        ('d', 1, Player::Eve),
        ('e', 2, Player::Adam),
    ];
    let edges = [
        ('a', 'e'),
        ('e', 'd'),
        ('d', 'e'),
        ('d', 'c'),
        ('c', 'b'),
        ('b', 'c'),
        ('a', 'b'),
        ('b', 'a'),
    ];

    Game::new_total(vertices, edges)
}
