use solver::{Game, GameError};

use crate::ParityGame;

pub fn parity_game_to_game(pg: &ParityGame) -> Result<Game<usize>, GameError> {
    let vertices = pg.nodes.iter().map(|n| (n.id, n.priority, n.player));
    let edges = pg.nodes.iter().flat_map(|n| n.successors.iter().map(move |&s| (n.id, s)));

    Game::new(vertices, edges)
}
