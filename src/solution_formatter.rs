use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::moves::Moves;
use crate::solver::simulator;
use crate::state::Layout;

/// Renders the level after each push (or each move) of a solution.
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    initial_layout: &'a Layout,
    moves: &'a Moves,
    include_steps: bool,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        board: &'a Board,
        initial_layout: &'a Layout,
        moves: &'a Moves,
        include_steps: bool,
        format: Format,
    ) -> Self {
        Self {
            board,
            initial_layout,
            moves,
            include_steps,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            self.board.format_with_layout(self.format, self.initial_layout)
        )?;

        // somebody could pass moves from a different level
        let (layouts, illegal) = simulator::replay(self.board, self.initial_layout, self.moves);
        for (mov, layout) in self.moves.iter().zip(&layouts) {
            if mov.is_push || self.include_steps {
                writeln!(f, "{}", self.board.format_with_layout(self.format, layout))?;
            }
        }
        if let Some(index) = illegal {
            if let Some(mov) = self.moves.iter().nth(index) {
                writeln!(f, "Illegal move {} at index {}", mov, index)?;
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
