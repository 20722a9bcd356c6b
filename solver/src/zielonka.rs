use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::attractor::attractor;
use crate::game::{union, Game, Player, Priority, SubGame, VertexId};
use crate::regions::WinningRegions;
use crate::Set;

/// Computes which player wins from each vertex of `game`.
///
/// The game is expected to be total, see [`Game::new_total`]. Otherwise the result is
/// still a partition of the vertices, but around dead ends it follows the attractor
/// convention rather than any notion of infinite play.
pub fn solve<V: Clone + Eq + Hash + Debug>(game: &Game<V>) -> WinningRegions<V> {
    let regions = zielonka(&game.full());
    regions.map(|&v| game.identity_of(v).clone())
}

/// McNaughton-Zielonka recursive algorithm on a subgame.
pub fn zielonka<V: Debug>(game: &SubGame<'_, V>) -> WinningRegions<VertexId> {
    let mut calls = 0;
    let regions = solve_rec(game, 0, &mut calls);
    debug!("Performed {calls} recursive calls on {} vertices", game.len());
    regions
}

fn solve_rec<V: Debug>(
    game: &SubGame<'_, V>,
    depth: usize,
    calls: &mut usize,
) -> WinningRegions<VertexId> {
    *calls += 1;

    let regions = match game.max_priority() {
        Some(max_priority) if max_priority > 0 => {
            let player = Player::of_priority(max_priority);
            solve_for(player, max_priority, game, depth, calls)
        }
        _ => {
            trace!("{:depth$}base case: Eve wins {:?}", "", game.game().identities(game.vertices()));
            WinningRegions { eve: game.vertices().clone(), adam: Set::default() }
        }
    };

    debug_assert!(regions.is_partition_of(game.vertices()), "regions don't partition the subgame");
    regions
}

/// The recursive step, where `player` is the one favoured by the maximum priority.
fn solve_for<V: Debug>(
    player: Player,
    max_priority: Priority,
    game: &SubGame<'_, V>,
    depth: usize,
    calls: &mut usize,
) -> WinningRegions<VertexId> {
    let graph = game.game();
    let opponent = player.opponent();

    let k = game.vertices_with_priority(max_priority);
    let attr = attractor(player, &k, game);

    debug!(
        "{:depth$}|V| = {}, m = {max_priority}, player = {player}, |K| = {}, |attr| = {}",
        "",
        game.len(),
        k.len(),
        attr.len()
    );
    trace!("{:depth$}K = {:?}, attr = {:?}", "", graph.identities(&k), graph.identities(&attr));

    let subgame = game.without(&attr);
    let (sub_own, sub_opponent) = solve_rec(&subgame, depth + 1, calls).into_player(player);

    if sub_opponent.is_empty() {
        debug_assert_eq!(&sub_own, subgame.vertices());
        trace!("{:depth$}{player} wins the whole subgame", "");
        return WinningRegions::from_player(player, game.vertices().clone(), Set::default());
    }

    let beta = attractor(opponent, &sub_opponent, game);
    debug!("{:depth$}|B| = {} for {opponent}", "", beta.len());
    trace!("{:depth$}B = {:?}", "", graph.identities(&beta));

    let (own, opp) = solve_rec(&game.without(&beta), depth + 1, calls).into_player(player);
    WinningRegions::from_player(player, own, union(&opp, &beta))
}
