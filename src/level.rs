use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::Layout;

/// A parsed level - the board and the initial positions of the player and boxes.
#[derive(Clone)]
pub struct Level {
    pub board: Board,
    pub(crate) layout: Layout,
}

impl Level {
    pub(crate) fn new(board: Board, layout: Layout) -> Self {
        Level { board, layout }
    }

    pub fn box_cnt(&self) -> usize {
        self.layout.box_positions().len()
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.format(Format::Xsb)
    }

    pub fn custom(&self) -> MapFormatter<'_> {
        self.format(Format::Custom)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        self.board.format_with_layout(format, &self.layout)
    }

    pub fn format_solution<'a>(
        &'a self,
        format: Format,
        moves: &'a Moves,
        include_steps: bool,
    ) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.board, &self.layout, moves, include_steps, format)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
