use chumsky::error::Simple;
use chumsky::primitive::{choice, just, none_of};
use chumsky::text::{self, TextParser};
use chumsky::Parser;
use solver::Player;

use crate::{Node, ParityGame};

/// Parses a game in the PGSolver format.
pub fn parse_parity_game(source: &str) -> Result<ParityGame, Vec<Simple<char>>> {
    let parity = just("parity").padded();
    let start = just("start").padded();
    let number = text::int(10)
        .try_map(|n: String, span| n.parse::<usize>().map_err(|e| Simple::custom(span, e)))
        .padded();
    let comma = just(',').padded();
    let semi = just(';');
    let newline = text::newline();

    let header = parity.ignore_then(number).then_ignore(semi).then_ignore(newline);
    let start = start.ignore_then(number).then_ignore(semi).then_ignore(newline).or_not();

    let player = choice((just('0').to(Player::Eve), just('1').to(Player::Adam)));
    let successors = number.separated_by(comma);
    let name = just('"')
        .ignore_then(none_of("\"").repeated().collect::<String>())
        .then_ignore(just('"'))
        .padded()
        .or_not();
    let comment = none_of(";").repeated();
    let row = number.then(number).then(player).then(successors).then(name).then_ignore(comment);
    let row = row.map(|((((id, priority), player), successors), name)| Node {
        id,
        priority,
        player,
        successors,
        name,
    });

    let rows = row.then_ignore(semi).separated_by(newline).allow_trailing();
    let game = header.ignore_then(start).then(rows).map(|(start, nodes)| ParityGame { start, nodes });

    game.parse(source)
}
