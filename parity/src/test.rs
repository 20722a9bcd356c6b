use chumsky::error::Simple;
use chumsky::primitive::{choice, just, none_of};
use chumsky::text::{self, TextParser};
use chumsky::Parser;
use solver::{solve, GameError, Player, Set};

use crate::{example_game, parity_game_to_game, parse_parity_game, FormatSet};

fn parse_parity_sol(source: &str) -> Result<Vec<(usize, Player)>, Vec<Simple<char>>> {
    let paritysol = just("paritysol").padded();
    let number = text::int(10).map(|n: String| n.parse::<usize>().unwrap()).padded();
    let semi = just(';');
    let newline = text::newline();

    let header = paritysol.then(number).then(semi).then(newline);

    let player = choice((just('0').to(Player::Eve), just('1').to(Player::Adam)));
    let succ = none_of(";").repeated();
    let row = number.then(player).then_ignore(succ);

    let rows = row.then_ignore(semi).separated_by(newline).allow_trailing();
    let sol = header.ignore_then(rows);

    sol.parse(source)
}

fn run_test(input: &str, sol: &str) {
    let pg = parse_parity_game(input).unwrap();
    let game = parity_game_to_game(&pg).unwrap();
    let regions = solve(&game);

    let sol = parse_parity_sol(sol).unwrap();
    assert_eq!(sol.len(), game.vertex_count());

    for (n, winner) in sol {
        assert_eq!(regions.winner_of(&n), Some(winner), "wrong winner for node {n}");
    }
}

macro_rules! declare_test {
    ($($name:ident),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let input = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/", stringify!($name)));
                let sol = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/", stringify!($name), ".sol"));
                run_test(input, sol)
            }
        )*
    };
}

#[test]
fn all() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/");
    for e in std::fs::read_dir(dir).unwrap() {
        let e = e.unwrap();

        let name = e.file_name().into_string().unwrap();
        let path = e.path();
        if name == ".gitignore" || path.extension() == Some("sol".as_ref()) {
            continue;
        }

        let input = std::fs::read_to_string(&path).unwrap();
        let sol = std::fs::read_to_string(path.with_extension("sol")).unwrap();

        if let Err(e) = std::panic::catch_unwind(|| run_test(&input, &sol)) {
            eprintln!("Test {name} failed");
            std::panic::resume_unwind(e);
        }
    }
}

declare_test! {
    example,
    cycles,
    recurring,
}

#[test]
fn parse_rows() {
    let pg = parse_parity_game("parity 1;\nstart 1;\n0 4 0 0,1 \"left\";\n1 7 1 0;\n").unwrap();

    assert_eq!(pg.start, Some(1));
    assert_eq!(pg.nodes.len(), 2);

    let left = &pg.nodes[0];
    assert_eq!((left.id, left.priority, left.player), (0, 4, Player::Eve));
    assert_eq!(left.successors, [0, 1]);
    assert_eq!(left.name.as_deref(), Some("left"));

    let right = &pg.nodes[1];
    assert_eq!((right.id, right.priority, right.player), (1, 7, Player::Adam));
    assert_eq!(right.successors, [0]);
    assert_eq!(right.name, None);
}

#[test]
fn parse_without_start() {
    let pg = parse_parity_game("parity 0;\n0 0 1 0;").unwrap();

    assert_eq!(pg.start, None);
    assert_eq!(pg.nodes.len(), 1);
}

#[test]
fn parse_bad_header() {
    assert!(parse_parity_game("game 1;\n0 0 0 0;\n").is_err());
}

#[test]
fn unknown_successor() {
    let pg = parse_parity_game("parity 1;\n0 0 0 1;\n").unwrap();
    let err = parity_game_to_game(&pg).unwrap_err();

    assert_eq!(err, GameError::UnknownVertex { from: "0".into(), to: "1".into() });
}

#[test]
fn example_regions() {
    let game = example_game().unwrap();
    let regions = solve(&game);

    assert_eq!(FormatSet(&regions.eve).to_string(), "{a, d, e}");
    assert_eq!(FormatSet(&regions.adam).to_string(), "{b, c}");
}

#[test]
fn format_empty() {
    assert_eq!(FormatSet(&Set::<usize>::default()).to_string(), "{}");
    assert_eq!(FormatSet(&[3, 1, 2].into_iter().collect::<Set<_>>()).to_string(), "{1, 2, 3}");
}
