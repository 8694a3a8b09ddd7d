use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::Layout;
use crate::vec2d::Vec2d;

/// Static geometry of a level - walls and goals. Never changes during a search.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) goals: Vec<Pos>,
}

impl Board {
    pub(crate) fn new(grid: Vec2d<MapCell>) -> Self {
        let goals = grid
            .positions()
            .filter(|&pos| grid[pos] == MapCell::Goal)
            .collect();
        Board { grid, goals }
    }

    pub fn width(&self) -> u8 {
        self.grid.cols()
    }

    pub fn height(&self) -> u8 {
        self.grid.rows()
    }

    /// Anything outside the board counts as wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        !self.grid.contains(pos) || self.grid[pos] == MapCell::Wall
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.contains(pos) && self.grid[pos] == MapCell::Goal
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub(crate) fn format_with_layout<'a>(
        &'a self,
        format: Format,
        layout: &'a Layout,
    ) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(layout), format)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.grid, None, Format::Xsb))
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    #[test]
    fn walls_and_goals() {
        let level: Level = r"
#####
#@$.#
#####
"
        .parse()
        .unwrap();
        let board = &level.board;
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 3);
        assert!(board.is_wall(Pos::new(0, 0)));
        assert!(!board.is_wall(Pos::new(1, 2)));
        assert!(board.is_goal(Pos::new(1, 3)));
        assert!(!board.is_goal(Pos::new(1, 2)));
        assert_eq!(board.goals(), &[Pos::new(1, 3)]);

        // outside
        assert!(board.is_wall(Pos::new(1, 5)));
        assert!(board.is_wall(Pos::new(3, 0)));
        assert!(!board.is_goal(Pos::new(7, 7)));
    }

    #[test]
    fn formatting_board() {
        let level: Level = r"
*###*
#@$.#
*###*#
"
        .parse()
        .unwrap();
        let expected = "
.###.
#  .#
.###.#
"
        .trim_start_matches('\n');
        assert_eq!(level.board.to_string(), expected);
        assert_eq!(format!("{:?}", level.board), expected);
    }
}
