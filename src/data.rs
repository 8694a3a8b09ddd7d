use std::fmt::{self, Debug, Display, Formatter};

/// Both rows and columns are stored in `u8`.
pub(crate) const MAX_SIZE: usize = 255;

/// Most boxes the solver accepts, at least one cell of a full row is left for the player.
pub(crate) const MAX_BOXES: usize = 254;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Wall,
    Goal,
}

impl Default for MapCell {
    fn default() -> Self {
        MapCell::Empty
    }
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Empty => write!(f, " "),
            MapCell::Wall => write!(f, "#"),
            MapCell::Goal => write!(f, "."),
        }
    }
}

/// What occupies a non-wall cell. Goal-ness is a property of the board, not of the contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

impl Contents {
    /// Lossless byte tag used to build layout signatures.
    pub(crate) fn tag(self) -> u8 {
        match self {
            Contents::Empty => b' ',
            Contents::Box => b'$',
            Contents::Player => b'@',
        }
    }
}

impl Default for Contents {
    fn default() -> Self {
        Contents::Empty
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> u16 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u16
    }

    /// Moves one cell in `dir`. Only guards against underflow,
    /// the upper bounds are checked by the grid.
    pub(crate) fn step(self, dir: Dir) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let r = i32::from(self.r) + dr;
        let c = i32::from(self.c) + dc;
        if r < 0 || c < 0 || r > MAX_SIZE as i32 || c > MAX_SIZE as i32 {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Right,
    Down,
    Left,
    Up,
}

/// Order in which the expander tries directions.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Right, Dir::Down, Dir::Left, Dir::Up];

impl Dir {
    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Up => (-1, 0),
        }
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Up => Dir::Down,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Up => write!(f, "u"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping() {
        let pos = Pos::new(0, 3);
        assert_eq!(pos.step(Dir::Up), None);
        assert_eq!(pos.step(Dir::Down), Some(Pos::new(1, 3)));
        assert_eq!(pos.step(Dir::Left), Some(Pos::new(0, 2)));
        assert_eq!(Pos::new(2, 0).step(Dir::Left), None);
        assert_eq!(Pos::new(255, 255).step(Dir::Right), None);
    }

    #[test]
    fn directions() {
        let pos = Pos::new(5, 5);
        for &dir in &DIRECTIONS {
            let next = pos.step(dir).unwrap();
            assert_eq!(next.step(dir.inverse()), Some(pos));
            assert_eq!(pos.dist(next), 1);
        }
        assert_eq!(Pos::new(1, 7).dist(Pos::new(4, 2)), 8);
    }
}
