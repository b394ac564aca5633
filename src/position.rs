use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::Direction;

/// Grid coordinate. Never changes once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord { pub row: usize, pub col: usize }

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    /// The cell one step away, or `None` when the step leaves the grid through row/col 0.
    /// Upper bounds are the grid's business.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Coord { row, col })
    }

    pub fn manhattan(self, other: Coord) -> usize { self.row.abs_diff(other.row) + self.col.abs_diff(other.col) }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "({}, {})", self.row, self.col) }
}

/// Identifier given to a position when it joins the exploration tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    Start,
    Finish,
    /// Discovery order, starting at 1.
    Seq(u32),
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Label::Start => f.write_str("SP"),
            Label::Finish => f.write_str("FP"),
            // three digits from 100 on; the two-char token shape is not kept there
            Label::Seq(n) => write!(f, "{n:02}"),
        }
    }
}

/// Handle of a node inside an [`ExplorationTree`](crate::tree::ExplorationTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize { self.0 }
}

/// A cell visited by a search, plus its links in the exploration tree.
///
/// The tree owns positions top-down through `children`; `parent` is a
/// back-reference used only to walk ancestry.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    coord: Coord,
    pub(crate) parent: Option<NodeId>,
    pub(crate) label: Option<Label>,
    pub(crate) children: Vec<NodeId>,
}

impl Position {
    /// Unlabelled, unlinked position.
    pub fn new(row: usize, col: usize) -> Self { Self::at(Coord::new(row, col)) }

    pub fn at(coord: Coord) -> Self { Self { coord, parent: None, label: None, children: Vec::new() } }

    pub fn labelled(coord: Coord, label: Label) -> Self { Self { label: Some(label), ..Self::at(coord) } }

    pub(crate) fn child_of(coord: Coord, parent: Option<NodeId>) -> Self { Self { parent, ..Self::at(coord) } }

    pub fn coord(&self) -> Coord { self.coord }
    pub fn row(&self) -> usize { self.coord.row }
    pub fn col(&self) -> usize { self.coord.col }
    pub fn parent(&self) -> Option<NodeId> { self.parent }
    pub fn label(&self) -> Option<Label> { self.label }
    pub fn children(&self) -> &[NodeId] { &self.children }

    /// Labels are set once, when the position is accepted into a tree.
    pub(crate) fn set_label(&mut self, label: Label) {
        debug_assert!(self.label.is_none() || self.label == Some(label), "label reassigned at {}", self.coord);
        self.label = Some(label);
    }

    /// Coordinate-only comparison; parent, label and children are ignored.
    pub fn same_cell(&self, other: &Position) -> bool { self.coord == other.coord }
}

/// Same as [`Position::same_cell`]. This is NOT structural equality: two
/// positions with different labels or subtrees compare equal when they sit on
/// the same cell. Compare trees with
/// [`ExplorationTree::shape`](crate::tree::ExplorationTree::shape) instead.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool { self.same_cell(other) }
}

impl Eq for Position {}

impl PartialEq<Coord> for Position {
    fn eq(&self, other: &Coord) -> bool { self.coord == *other }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(l) => write!(f, "{} {}", l, self.coord),
            None => write!(f, "?? {}", self.coord),
        }
    }
}
