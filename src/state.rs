use std::fmt::{self, Debug, Formatter};

use crate::data::{Contents, Pos};
use crate::moves::Moves;
use crate::vec2d::Vec2d;

/// Dynamic contents of the board - where the boxes and the player are.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Layout {
    cells: Vec2d<Contents>,
}

impl Layout {
    pub(crate) fn new(cells: Vec2d<Contents>) -> Self {
        Layout { cells }
    }

    pub(crate) fn get(&self, pos: Pos) -> Contents {
        self.cells[pos]
    }

    pub(crate) fn set(&mut self, pos: Pos, contents: Contents) {
        self.cells[pos] = contents;
    }

    /// Scans the layout, there is exactly one player in any valid layout.
    pub(crate) fn player_pos(&self) -> Option<Pos> {
        self.cells
            .positions()
            .find(|&pos| self.cells[pos] == Contents::Player)
    }

    pub(crate) fn box_positions(&self) -> Vec<Pos> {
        self.cells
            .positions()
            .filter(|&pos| self.cells[pos] == Contents::Box)
            .collect()
    }

    pub(crate) fn signature(&self) -> Signature {
        Signature(self.cells.as_slice().iter().map(|c| c.tag()).collect())
    }
}

impl Debug for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.cells.rows() {
            for &cell in self.cells.row(r) {
                write!(f, "{}", cell.tag() as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lossless encoding of a layout, rows concatenated in order.
///
/// Dimensions are fixed for the whole search so no separators are needed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Signature(Box<[u8]>);

impl Debug for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

/// How a state was reached from its predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Start,
    /// Walk prefix followed by exactly one push.
    Push(Moves),
}

/// One node of the search tree.
///
/// States live in an arena owned by the driver, `prev` is an index into it.
#[derive(Debug, Clone)]
pub(crate) struct PuzzleState {
    pub(crate) layout: Layout,
    pub(crate) heuristic: u32,
    pub(crate) action: Action,
    pub(crate) prev: Option<usize>,
    pub(crate) depth: u16,
}

impl PuzzleState {
    pub(crate) fn root(layout: Layout, heuristic: u32) -> Self {
        PuzzleState {
            layout,
            heuristic,
            action: Action::Start,
            prev: None,
            depth: 0,
        }
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.heuristic == 0
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    #[test]
    fn derived_positions() {
        let level: Level = r"
#######
#@$ * #
# $ . #
#######
"
        .parse()
        .unwrap();
        let layout = &level.layout;
        assert_eq!(layout.player_pos(), Some(Pos::new(1, 1)));
        assert_eq!(
            layout.box_positions(),
            vec![Pos::new(1, 2), Pos::new(1, 4), Pos::new(2, 2)]
        );
    }

    #[test]
    fn signatures() {
        let a: Level = "#@$ .#".parse().unwrap();
        let b: Level = "#@$ .#".parse().unwrap();
        let c: Level = "# @$.#".parse().unwrap();
        // goals are not part of the layout
        let d: Level = "#@$  #".parse().unwrap();

        assert_eq!(a.layout.signature(), b.layout.signature());
        assert_ne!(a.layout.signature(), c.layout.signature());
        assert_eq!(a.layout.signature(), d.layout.signature());
        assert_eq!(format!("{:?}", a.layout.signature()), "\" @$   \"");
    }
}
