// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod board;
pub mod config;
pub mod level;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;

mod data;
mod fs;
mod state;
mod vec2d;

use std::error::Error;
use std::path::Path;

use crate::config::{Limits, Method};
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub use crate::data::{Dir, Pos};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let level = fs::read_file(self)?;
        Ok(level.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, method: Method, limits: &Limits) -> Result<SolverOk, SolverErr>;
}

/// Solves a level given as a grid of walls and goals and a grid of the player and boxes.
///
/// Returns the player moves as `r`/`d`/`l`/`u`, an empty string when there is no solution.
pub fn solve_grids<S: AsRef<str>>(
    width: usize,
    height: usize,
    map_grid: &[S],
    items_grid: &[S],
) -> Result<String, Box<dyn Error>> {
    let level = parser::parse_grids(width, height, map_grid, items_grid)?;
    let solution = level.solve(Method::Moves, &Limits::unbounded())?;
    Ok(solution
        .moves
        .map(|moves| moves.to_primitives())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use separator::Separatable;

    use crate::solver::SearchStatus;

    use super::*;

    #[test]
    fn grids_corridor() {
        let moves = solve_grids(3, 1, &["  ."], &["@$ "]).unwrap();
        assert_eq!(moves, "r");

        let moves = solve_grids(4, 1, &["   ."], &["@$  "]).unwrap();
        assert_eq!(moves, "rr");
    }

    #[test]
    fn grids_no_solution() {
        let moves = solve_grids(4, 1, &["  #."], &["@$  "]).unwrap();
        assert_eq!(moves, "");
    }

    #[test]
    fn grids_malformed() {
        let err = solve_grids(3, 1, &["   "], &["@$ "]).unwrap_err();
        assert_eq!(err.to_string(), "Different number of boxes and goals");

        let err = solve_grids(3, 1, &["  ."], &["@$"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Map and items grids don't match the given dimensions"
        );
    }

    #[test]
    fn grids_with_walls() {
        let map = [
            "########", //
            "#      #", //
            "#   #  #", //
            "# .  . #", //
            "########",
        ];
        let items = [
            "        ", //
            "        ", //
            "  $  $ @", //
            "        ", //
            "        ",
        ];
        // the player is inside a wall
        assert!(solve_grids(8, 5, &map, &items).is_err());

        let items = [
            "        ", //
            "        ", //
            "  $  $@ ", //
            "        ", //
            "        ",
        ];
        let moves = solve_grids(8, 5, &map, &items).unwrap();
        assert!(!moves.is_empty());
        assert!(moves.chars().all(|c| "rdlu".contains(c)));
    }

    #[test]
    fn levels() {
        let levels = [
            (
                "one-way",
                r"
#####
#  .#
### #
#   #
# $ #
# @ #
#####
",
                true,
            ),
            (
                "two-boxes",
                r"
#######
#     #
# $$  #
#..@  #
#######
",
                true,
            ),
            (
                "three-in-a-row",
                r"
########
#      #
# $$$  #
#     @#
# ...  #
########
",
                true,
            ),
            (
                "stuck",
                r"
#######
#@  $ #
##### #
#.    #
#######
",
                false,
            ),
        ];

        for &(name, level, solvable) in &levels {
            let started = Instant::now();
            let parsed: Level = level.parse().unwrap();
            let solution = parsed.solve(Method::Moves, &Limits::unbounded()).unwrap();
            println!(
                "Solved {} in approximately {} ms",
                name,
                (started.elapsed().as_millis() as u64).separated_string()
            );
            println!("{:?}", solution);

            match solution.moves {
                Some(ref moves) => {
                    assert!(solvable, "{} should have no solution", name);
                    assert_eq!(solution.status, SearchStatus::Solved);
                    let replayed = parsed
                        .format_solution(config::Format::Xsb, moves, false)
                        .to_string();
                    assert!(!replayed.contains("Illegal"), "{}", replayed);
                }
                None => {
                    assert!(!solvable, "{} should be solvable", name);
                    assert_eq!(solution.status, SearchStatus::Exhausted);
                }
            }
        }
    }
}
