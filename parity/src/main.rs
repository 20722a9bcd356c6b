use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::warn;
use parity::{example_game, parity_game_to_game, parse_parity_game, FormatSet};
use solver::{solve, Game, WinningRegions};

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        println!("No parity game file provided, solving the example game");
        let game = example_game()?;
        solve_and_print(&game);
        return Ok(());
    };
    let node = std::env::args()
        .nth(2)
        .map(|n| n.parse::<usize>().context("Failed to parse starting node"))
        .transpose()?;

    let now = Instant::now();

    let file = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read parity game file {path}"))?;
    let pg = parse_parity_game(&file)
        .map_err(|errs| anyhow!("Failed to parse parity game file: {errs:?}"))?;
    let game = parity_game_to_game(&pg).context("Invalid parity game")?;

    if !game.is_total() {
        warn!("The game is not total: {} vertices have no successors", game.dead_ends().count());
    }

    println!("Preprocessing took {:?}", now.elapsed());

    let regions = solve_and_print(&game);

    if let Some(node) = node.or(pg.start) {
        let winner = regions.winner_of(&node).with_context(|| format!("Node {node} doesn't exist"))?;
        match pg.nodes.iter().find(|n| n.id == node).and_then(|n| n.name.as_deref()) {
            Some(name) => println!("Winner from node {node} ({name}): {winner}"),
            None => println!("Winner from node {node}: {winner}"),
        }
    }

    Ok(())
}

fn solve_and_print<V>(game: &Game<V>) -> WinningRegions<V>
where
    V: Clone + Eq + Hash + Debug + Display + Ord,
{
    let now = Instant::now();

    let regions = solve(game);

    println!("Solve took {:?}", now.elapsed());
    println!("W_E = {}", FormatSet(&regions.eve));
    println!("W_A = {}", FormatSet(&regions.adam));

    regions
}
