#![allow(dead_code)]

use mazewalk::{Coord, Grid};

pub const WALLS: [(usize, usize); 9] = [(0, 1), (0, 3), (1, 0), (1, 4), (2, 1), (3, 3), (3, 4), (5, 2), (5, 4)];
pub const START: Coord = Coord::new(3, 2);
pub const FINISH: Coord = Coord::new(5, 0);

/// 6x5 reference maze with only walls placed; start and finish cells are empty.
pub fn reference_maze() -> Grid {
    let mut g = Grid::new(6, 5);
    for (r, c) in WALLS { g.set(Coord::new(r, c), mazewalk::CellMarker::Wall).unwrap(); }
    g
}

/// Same maze in text form, with the start and finish markers written in.
pub fn reference_text() -> String {
    [
        "  ,XX,  ,XX,  ",
        "XX,  ,  ,  ,XX",
        "  ,XX,  ,  ,  ",
        "  ,  ,SP,XX,XX",
        "  ,  ,  ,  ,  ",
        "FP,  ,XX,  ,XX",
    ].join("\n")
}

/// `(label, (row, col), children)` in pre-order.
pub type Shape = Vec<(&'static str, (usize, usize), Vec<&'static str>)>;

pub fn shape_of(tree: &mazewalk::ExplorationTree) -> Vec<(String, (usize, usize), Vec<String>)> {
    tree.shape().into_iter().map(|n| (n.label, (n.coord.row, n.coord.col), n.children)).collect()
}

pub fn owned(shape: Shape) -> Vec<(String, (usize, usize), Vec<String>)> {
    shape.into_iter()
        .map(|(l, c, ch)| (l.to_string(), c, ch.into_iter().map(str::to_string).collect()))
        .collect()
}
