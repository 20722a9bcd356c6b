use crate::game::{Player, SubGame, VertexId};
use crate::{Map, Set};


/// Computes the set of vertices of `game` from which `player` can force the play into `target`.
///
/// This is the least superset `A` of `target` such that every vertex of `player`
/// with a successor in `A` is in `A`, and every vertex of the opponent whose
/// successors are all in `A` is in `A`. The latter includes opponent vertices
/// without successors in `game`.
///
/// Runs in time linear in the size of `game`: every opponent vertex keeps a count
/// of its successors that are not attracted yet and joins once it reaches zero.
pub fn attractor<V>(player: Player, target: &Set<VertexId>, game: &SubGame<'_, V>) -> Set<VertexId> {
    debug_assert!(target.iter().all(|&v| game.contains(v)), "target is not part of the game");

    let graph = game.game();
    let opponent = player.opponent();

    let mut attr = target.clone();
    let mut queue = target.iter().copied().collect::<Vec<_>>();

    // Dead ends can't avoid anything.
    for &v in game.vertices() {
        if graph.player_of(v) == opponent
            && !attr.contains(&v)
            && game.successors_of(v).next().is_none()
        {
            attr.insert(v);
            queue.push(v);
        }
    }

    let mut remaining = Map::<VertexId, usize>::default();

    while let Some(v) = queue.pop() {
        for u in game.predecessors_of(v) {
            if attr.contains(&u) {
                continue;
            }

            let attracted = if graph.player_of(u) == player {
                true
            } else {
                let count = remaining.entry(u).or_insert_with(|| game.successors_of(u).count());
                *count -= 1;
                *count == 0
            };

            if attracted {
                attr.insert(u);
                queue.push(u);
            }
        }
    }

    attr
}
