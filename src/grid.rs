use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use colored::*;
use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::MazeError, position::{Coord, Label, Position}};

/// What a cell currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellMarker {
    #[default]
    Empty,
    Wall,
    Start,
    Finish,
    /// Sequence label of the tree node that claimed the cell.
    Visited(u32),
}

impl CellMarker {
    pub fn is_empty(self) -> bool { matches!(self, CellMarker::Empty) }

    /// Two-character token: "  ", "XX", "SP", "FP" or the zero-padded label.
    pub fn token(self) -> String {
        match self {
            CellMarker::Empty => "  ".into(),
            CellMarker::Wall => "XX".into(),
            CellMarker::Start => Label::Start.to_string(),
            CellMarker::Finish => Label::Finish.to_string(),
            CellMarker::Visited(n) => Label::Seq(n).to_string(),
        }
    }

    fn colored_token(self) -> ColoredString {
        let t = self.token();
        match self {
            CellMarker::Empty => t.normal(),
            CellMarker::Wall => t.on_white().black(),
            CellMarker::Start => t.green().bold(),
            CellMarker::Finish => t.red().bold(),
            CellMarker::Visited(_) => t.cyan(),
        }
    }
}

impl From<Label> for CellMarker {
    fn from(l: Label) -> Self {
        match l {
            Label::Start => CellMarker::Start,
            Label::Finish => CellMarker::Finish,
            Label::Seq(n) => CellMarker::Visited(n),
        }
    }
}

impl Display for CellMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.token()) }
}

impl FromStr for CellMarker {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "  " => Ok(CellMarker::Empty),
            "XX" => Ok(CellMarker::Wall),
            "SP" => Ok(CellMarker::Start),
            "FP" => Ok(CellMarker::Finish),
            _ if s.len() >= 2 && s.bytes().all(|b| b.is_ascii_digit()) => s.parse().map(CellMarker::Visited).map_err(|_| ()),
            _ => Err(()),
        }
    }
}

/// Moves tried from every cell, in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction { Up, Right, Down, Left }

impl Direction {
    pub const CLOCKWISE: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Row-major matrix of cell markers with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellMarker>,
}

impl Grid {
    /// All-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self { Self { rows, cols, cells: vec![CellMarker::Empty; rows * cols] } }

    /// Grid from a literal marker matrix. Rows must all have the same length.
    pub fn from_markers(rows: Vec<Vec<CellMarker>>) -> Result<Self, MazeError> {
        let expected = rows.first().map(Vec::len).ok_or(MazeError::Empty)?;
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(MazeError::Ragged { row, expected, found: r.len() });
        }
        let n = rows.len();
        Ok(Self { rows: n, cols: expected, cells: rows.into_iter().flatten().collect() })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn contains(&self, c: Coord) -> bool { c.row < self.rows && c.col < self.cols }

    fn idx(&self, c: Coord) -> usize { c.row * self.cols + c.col }

    pub fn get(&self, c: Coord) -> Option<CellMarker> { self.contains(c).then(|| self.cells[self.idx(c)]) }

    /// Overwrites a cell. Used to pre-populate walls, start and finish.
    pub fn set(&mut self, c: Coord, m: CellMarker) -> Result<(), MazeError> {
        if !self.contains(c) {
            return Err(MazeError::OutOfBounds { row: c.row, col: c.col });
        }
        let i = self.idx(c);
        self.cells[i] = m;
        Ok(())
    }

    /// First cell (row-major) holding `m`.
    pub fn find(&self, m: CellMarker) -> Option<Coord> {
        self.cells.iter().position(|&x| x == m).map(|i| Coord::new(i / self.cols, i % self.cols))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellMarker)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &m)| (Coord::new(i / cols, i % cols), m))
    }

    /// True iff the neighbour in `dir` lies inside `[0, rows) x [0, cols)` and is empty.
    pub fn is_legal_move(&self, from: Coord, dir: Direction) -> bool {
        from.step(dir).and_then(|to| self.get(to)).is_some_and(CellMarker::is_empty)
    }

    /// Legal neighbours of `from`, in clockwise order starting upwards.
    ///
    /// Returns bare coordinates: the grid knows nothing about tree node ids, so
    /// the caller wraps each one in a [`Position`] whose parent is the node it
    /// is expanding.
    pub fn neighbors(&self, from: Coord) -> Vec<Coord> { self.neighbors_toward(from, None) }

    /// Like [`Grid::neighbors`], but `goal` is also reachable when it carries the finish marker.
    pub fn neighbors_toward(&self, from: Coord, goal: Option<Coord>) -> Vec<Coord> {
        Direction::CLOCKWISE.iter()
            .filter_map(|&d| {
                let to = from.step(d)?;
                let open = self.is_legal_move(from, d)
                    || (Some(to) == goal && self.get(to) == Some(CellMarker::Finish));
                open.then_some(to)
            })
            .collect()
    }

    /// Writes the position's label into its cell. Returns whether the cell changed.
    /// Unlabelled or out-of-range positions are ignored.
    pub fn mark(&mut self, p: &Position) -> bool {
        let Some(label) = p.label() else { return false };
        if !self.contains(p.coord()) { return false; }
        let i = self.idx(p.coord());
        let m = CellMarker::from(label);
        if self.cells[i] == m { return false; }
        self.cells[i] = m;
        true
    }

    /// Rows of comma-separated tokens, one row per line.
    pub fn to_text(&self) -> String {
        self.cells.chunks(self.cols.max(1)).map(|row| row.iter().join(",")).join("\n")
    }

    pub fn to_pretty_string(&self, color: bool) -> String {
        let border = format!("+{}+\n", "--".repeat(self.cols));
        let mut s = border.clone();
        for row in self.cells.chunks(self.cols.max(1)) {
            s.push('|');
            for &m in row {
                if color { s.push_str(&m.colored_token().to_string()); } else { s.push_str(&m.token()); }
            }
            s.push_str("|\n");
        }
        s.push_str(&border);
        s
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.to_text()) }
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, MazeError> {
        let mut rows = Vec::new();
        for line in s.lines().map(|l| l.trim_end_matches('\r')).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let cells = line.split(',').enumerate()
                .map(|(col, t)| t.parse::<CellMarker>().map_err(|_| MazeError::UnknownToken { row, col, token: t.to_string() }))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }
        Grid::from_markers(rows)
    }
}
