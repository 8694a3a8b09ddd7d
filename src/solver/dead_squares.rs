use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::{Dir, Pos};
use crate::vec2d::Vec2d;

/// Cells where a box can never be moved again and which are not goals.
///
/// Only simple corners are detected - a wall (or the edge of the board) on two
/// orthogonal sides. Deadlocks formed by several boxes are not.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct DeadSquares {
    dead: Vec2d<bool>,
}

const CORNERS: [(Dir, Dir); 4] = [
    (Dir::Up, Dir::Left),
    (Dir::Up, Dir::Right),
    (Dir::Down, Dir::Left),
    (Dir::Down, Dir::Right),
];

impl DeadSquares {
    pub(crate) fn new(board: &Board) -> Self {
        let mut dead = board.grid.scratchpad();

        for pos in board.grid.positions() {
            if board.is_wall(pos) || board.is_goal(pos) {
                continue;
            }
            dead[pos] = CORNERS
                .iter()
                .any(|&(vertical, horizontal)| {
                    blocked(board, pos, vertical) && blocked(board, pos, horizontal)
                });
        }

        DeadSquares { dead }
    }

    /// Nothing is dead - used when replaying moves.
    pub(crate) fn none(board: &Board) -> Self {
        DeadSquares {
            dead: board.grid.scratchpad(),
        }
    }

    pub(crate) fn is_dead(&self, pos: Pos) -> bool {
        self.dead.contains(pos) && self.dead[pos]
    }

    pub(crate) fn count(&self) -> usize {
        self.dead.as_slice().iter().filter(|&&d| d).count()
    }
}

fn blocked(board: &Board, pos: Pos, dir: Dir) -> bool {
    match board.grid.neighbor(pos, dir) {
        Some(next) => board.is_wall(next),
        None => true,
    }
}

impl Display for DeadSquares {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.dead.rows() {
            for &cell in self.dead.row(r) {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for DeadSquares {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    fn dead_squares(level: &str) -> DeadSquares {
        let level: Level = level.parse().unwrap();
        DeadSquares::new(&level.board)
    }

    #[test]
    fn corners() {
        let dead = dead_squares(
            r"
######
#@   #
#  $ #
#   .#
######
",
        );
        let expected = r"
000000
010010
000000
010000
000000
"
        .trim_start_matches('\n');
        assert_eq!(dead.to_string(), expected);
        assert_eq!(dead.count(), 3);
        assert!(dead.is_dead(Pos::new(1, 1)));
        assert!(!dead.is_dead(Pos::new(3, 4)));
    }

    #[test]
    fn inner_walls() {
        let dead = dead_squares(
            r"
#####
##@##
##$##
#  .#
#####
",
        );
        let expected = r"
00000
00100
00000
01000
00000
"
        .trim_start_matches('\n');
        assert_eq!(dead.to_string(), expected);
    }

    #[test]
    fn board_edges_count_as_walls() {
        let dead = dead_squares("@$.");
        assert_eq!(dead.to_string(), "100\n");

        let dead = dead_squares("@$ .");
        assert_eq!(dead.to_string(), "1000\n");
        assert!(!dead.is_dead(Pos::new(0, 2)));

        // a goal in a corner is never dead
        let dead = dead_squares(".$@");
        assert_eq!(dead.to_string(), "001\n");
    }

    #[test]
    fn nothing_dead() {
        let level: Level = "#@$.#".parse().unwrap();
        let none = DeadSquares::none(&level.board);
        assert_eq!(none.count(), 0);
        assert!(!none.is_dead(Pos::new(0, 9)));
    }
}
