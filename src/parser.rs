use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::config::Format;
use crate::data::{Contents, MapCell, Pos, MAX_SIZE};
use crate::level::Level;
use crate::state::Layout;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    TooLarge,
    MultiplePlayers,
    NoPlayer,
    DimensionMismatch,
    BoxOnWall(usize, usize),
    PlayerOnWall,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Map larger than {} rows/columns", MAX_SIZE),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::DimensionMismatch => {
                write!(f, "Map and items grids don't match the given dimensions")
            }
            ParserErr::BoxOnWall(r, c) => write!(f, "Box inside a wall at pos: [{}, {}]", r, c),
            ParserErr::PlayerOnWall => write!(f, "Player inside a wall"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Collects cells row by row, shared by all the input formats.
#[derive(Default)]
struct LevelBuilder {
    grid: Vec<Vec<MapCell>>,
    contents: Vec<Vec<Contents>>,
    player_pos: Option<Pos>,
}

impl LevelBuilder {
    fn new_row(&mut self, r: usize) -> Result<(), ParserErr> {
        if r >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        self.grid.push(Vec::new());
        self.contents.push(Vec::new());
        Ok(())
    }

    fn push(&mut self, cell: MapCell, contents: Contents) -> Result<(), ParserErr> {
        let r = self.grid.len() - 1;
        let c = self.grid[r].len();
        if c >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        if contents == Contents::Player {
            if self.player_pos.is_some() {
                return Err(ParserErr::MultiplePlayers);
            }
            self.player_pos = Some(Pos::new(r as u8, c as u8));
        }
        self.grid[r].push(cell);
        self.contents[r].push(contents);
        Ok(())
    }

    fn build(self) -> Result<Level, ParserErr> {
        if self.player_pos.is_none() {
            return Err(ParserErr::NoPlayer);
        }
        let grid = Vec2d::new(&self.grid);
        let contents = Vec2d::new(&self.contents);
        Ok(Level::new(Board::new(grid), Layout::new(contents)))
    }
}

/// Detects the format automatically.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    if level.contains('<') {
        parse_format(level, Format::Custom)
    } else {
        parse_format(level, Format::Xsb)
    }
}

pub(crate) fn parse_format(level: &str, format: Format) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    match format {
        Format::Custom => parse_custom(level),
        Format::Xsb => parse_xsb(level),
    }
}

/// Parses my custom format
fn parse_custom(level: &str) -> Result<Level, ParserErr> {
    let mut builder = LevelBuilder::default();

    for (r, line) in level.lines().enumerate() {
        builder.new_row(r)?;
        let mut chars = line.chars();
        let mut c = 0;
        while let (Some(c1), Some(c2)) = (chars.next(), chars.next()) {
            let contents = match c1 {
                '<' => {
                    if c2 != '>' {
                        return Err(ParserErr::Pos(r, c));
                    }
                    builder.push(MapCell::Wall, Contents::Empty)?;
                    c += 1;
                    continue; // skip parsing c2
                }
                ' ' => Contents::Empty,
                'B' => Contents::Box,
                'P' => Contents::Player,
                _ => return Err(ParserErr::Pos(r, c)),
            };
            let cell = match c2 {
                ' ' => MapCell::Empty,
                '_' => MapCell::Goal,
                _ => return Err(ParserErr::Pos(r, c)),
            };
            builder.push(cell, contents)?;
            c += 1;
        }
    }

    builder.build()
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
fn parse_xsb(level: &str) -> Result<Level, ParserErr> {
    let mut builder = LevelBuilder::default();

    for (r, line) in level.lines().enumerate() {
        builder.new_row(r)?;
        for (c, cur_char) in line.chars().enumerate() {
            let (cell, contents) = match cur_char {
                '#' => (MapCell::Wall, Contents::Empty),
                'p' | '@' => (MapCell::Empty, Contents::Player),
                'P' | '+' => (MapCell::Goal, Contents::Player),
                'b' | '$' => (MapCell::Empty, Contents::Box),
                'B' | '*' => (MapCell::Goal, Contents::Box),
                '.' => (MapCell::Goal, Contents::Empty),
                ' ' | '-' | '_' => (MapCell::Empty, Contents::Empty),
                _ => return Err(ParserErr::Pos(r, c)),
            };
            builder.push(cell, contents)?;
        }
    }

    builder.build()
}

/// Parses the static map and the dynamic items given as two separate grids.
///
/// Map: `#` wall, `.` goal (`*` and `+` are accepted too), anything else floor.
/// Items: `@` player, `$` box, anything else empty.
pub(crate) fn parse_grids<S: AsRef<str>>(
    width: usize,
    height: usize,
    map_grid: &[S],
    items_grid: &[S],
) -> Result<Level, ParserErr> {
    if width > MAX_SIZE || height > MAX_SIZE {
        return Err(ParserErr::TooLarge);
    }
    if width == 0 || height == 0 || map_grid.len() != height || items_grid.len() != height {
        return Err(ParserErr::DimensionMismatch);
    }

    let mut builder = LevelBuilder::default();
    for (r, (map_row, items_row)) in map_grid.iter().zip(items_grid).enumerate() {
        let map_row: Vec<char> = map_row.as_ref().chars().collect();
        let items_row: Vec<char> = items_row.as_ref().chars().collect();
        if map_row.len() != width || items_row.len() != width {
            return Err(ParserErr::DimensionMismatch);
        }

        builder.new_row(r)?;
        for (c, (&map_char, &item_char)) in map_row.iter().zip(&items_row).enumerate() {
            let cell = match map_char {
                '#' => MapCell::Wall,
                '.' | '*' | '+' => MapCell::Goal,
                _ => MapCell::Empty,
            };
            let contents = match item_char {
                '@' => Contents::Player,
                '$' => Contents::Box,
                _ => Contents::Empty,
            };
            match (cell, contents) {
                (MapCell::Wall, Contents::Box) => return Err(ParserErr::BoxOnWall(r, c)),
                (MapCell::Wall, Contents::Player) => return Err(ParserErr::PlayerOnWall),
                _ => {}
            }
            builder.push(cell, contents)?;
        }
    }

    builder.build()
}
