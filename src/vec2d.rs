use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{Dir, Pos};

/// Row-major grid indexed by `Pos`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T> Vec2d<T> {
    /// Pads shorter rows with `T::default()`.
    pub(crate) fn new(grid: &[Vec<T>]) -> Self
    where
        T: Copy + Default,
    {
        assert!(!grid.is_empty());

        let max_cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut data = Vec::with_capacity(grid.len() * max_cols);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..max_cols {
                data.push(T::default());
            }
        }
        Vec2d {
            data,
            rows: grid.len() as u8,
            cols: max_cols as u8,
        }
    }

    pub(crate) fn rows(&self) -> u8 {
        self.rows
    }

    pub(crate) fn cols(&self) -> u8 {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r < self.rows && pos.c < self.cols
    }

    /// The neighboring cell in `dir` or `None` when it's outside the grid.
    pub(crate) fn neighbor(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        pos.step(dir).filter(|&next| self.contains(next))
    }

    pub(crate) fn scratchpad<U: Copy + Default>(&self) -> Vec2d<U> {
        self.scratchpad_with_default(U::default())
    }

    pub(crate) fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub(crate) fn positions(&self) -> Positions {
        Positions {
            rows: self.rows,
            cols: self.cols,
            next: 0,
        }
    }

    pub(crate) fn row(&self, r: u8) -> &[T] {
        let start = usize::from(r) * usize::from(self.cols);
        &self.data[start..start + usize::from(self.cols)]
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{:?} out of bounds", pos);
        usize::from(pos.r) * usize::from(self.cols) + usize::from(pos.c)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Positions {
    rows: u8,
    cols: u8,
    next: usize,
}

impl Iterator for Positions {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let cols = usize::from(self.cols);
        if cols == 0 || self.next >= usize::from(self.rows) * cols {
            return None;
        }
        let pos = Pos::new((self.next / cols) as u8, (self.next % cols) as u8);
        self.next += 1;
        Some(pos)
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for cell in self.row(r) {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for cell in self.row(r) {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = self.index_of(index);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}
