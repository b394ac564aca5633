use mazewalk::{CellMarker, Coord, Direction::*, Grid, Label, MazeError, Position};
use pretty_assertions::assert_eq;

fn half_explored() -> Grid {
    [
        "  ,XX,  ,XX,  ",
        "XX,  ,04,10,XX",
        "  ,XX,01,  ,  ",
        "  ,03,SP,XX,XX",
        "  ,  ,02,  ,  ",
        "FP,  ,XX,  ,XX",
    ].join("\n").parse().unwrap()
}

fn c(row: usize, col: usize) -> Coord { Coord::new(row, col) }

#[test]
fn moving_up() {
    let g = half_explored();
    assert!(!g.is_legal_move(c(3, 1), Up));
    assert!(!g.is_legal_move(c(0, 2), Up));
    assert!(!g.is_legal_move(c(2, 3), Up));
    assert!(g.is_legal_move(c(1, 2), Up));
}

#[test]
fn moving_right() {
    let g = half_explored();
    assert!(!g.is_legal_move(c(3, 2), Right));
    assert!(!g.is_legal_move(c(2, 4), Right));
    assert!(!g.is_legal_move(c(4, 1), Right));
    assert!(g.is_legal_move(c(2, 2), Right));
}

#[test]
fn moving_down() {
    let g = half_explored();
    assert!(!g.is_legal_move(c(5, 1), Down));
    assert!(!g.is_legal_move(c(2, 3), Down));
    assert!(!g.is_legal_move(c(3, 2), Down));
    assert!(g.is_legal_move(c(1, 3), Down));
}

#[test]
fn moving_left() {
    let g = half_explored();
    assert!(!g.is_legal_move(c(2, 0), Left));
    assert!(!g.is_legal_move(c(3, 2), Left));
    assert!(!g.is_legal_move(c(2, 2), Left));
    assert!(g.is_legal_move(c(1, 2), Left));
}

#[test]
fn start_and_finish_are_never_reentered() {
    let g = half_explored();
    assert!(!g.is_legal_move(c(2, 2), Down));
    assert!(!g.is_legal_move(c(4, 0), Down));
}

#[test]
fn next_positions() {
    let g = half_explored();
    assert_eq!(g.neighbors(c(3, 2)), Vec::<Coord>::new());
    assert_eq!(g.neighbors(c(1, 1)), Vec::<Coord>::new());
    assert_eq!(g.neighbors(c(2, 3)), vec![c(2, 4)]);
    assert_eq!(g.neighbors(c(3, 0)), vec![c(2, 0), c(4, 0)]);
    assert_eq!(g.neighbors(c(4, 1)), vec![c(5, 1), c(4, 0)]);
}

#[test]
fn goal_with_finish_marker_is_reachable_only_when_named() {
    let g = half_explored();
    assert_eq!(g.neighbors(c(4, 0)), Vec::<Coord>::new());
    assert_eq!(g.neighbors_toward(c(4, 0), Some(c(5, 0))), vec![c(5, 0)]);
    assert_eq!(g.neighbors_toward(c(4, 0), Some(c(3, 2))), Vec::<Coord>::new());
}

#[test]
fn neighbors_are_clockwise_single_steps() {
    let g = Grid::new(3, 3);
    assert_eq!(g.neighbors(c(1, 1)), vec![c(0, 1), c(1, 2), c(2, 1), c(1, 0)]);
    assert_eq!(g.neighbors(c(0, 0)), vec![c(0, 1), c(1, 0)]);
    assert_eq!(g.neighbors(c(2, 2)), vec![c(1, 2), c(2, 1)]);
    for from in [c(0, 0), c(1, 1), c(2, 1)] {
        for n in g.neighbors(from) { assert_eq!(from.manhattan(n), 1); }
    }
}

#[test]
fn mark_is_idempotent() {
    let mut g = Grid::new(2, 2);
    let p = Position::labelled(c(0, 1), Label::Seq(3));
    assert!(g.mark(&p));
    let once = g.clone();
    assert!(!g.mark(&p));
    assert_eq!(g, once);
    assert_eq!(g.get(c(0, 1)), Some(CellMarker::Visited(3)));
}

#[test]
fn mark_ignores_out_of_range_and_unlabelled() {
    let mut g = Grid::new(2, 2);
    let before = g.clone();
    assert!(!g.mark(&Position::labelled(c(2, 0), Label::Seq(1))));
    assert!(!g.mark(&Position::new(0, 0)));
    assert_eq!(g, before);
}

#[test]
fn tokens() {
    assert_eq!(CellMarker::Empty.token(), "  ");
    assert_eq!(CellMarker::Wall.token(), "XX");
    assert_eq!(CellMarker::Start.token(), "SP");
    assert_eq!(CellMarker::Finish.token(), "FP");
    assert_eq!(CellMarker::Visited(7).token(), "07");
    assert_eq!(CellMarker::Visited(42).token(), "42");
    assert_eq!(Label::Seq(123).to_string(), "123");
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<Grid>(), Err(MazeError::Empty));
    assert_eq!(
        "  ,XX\nXX".parse::<Grid>(),
        Err(MazeError::Ragged { row: 1, expected: 2, found: 1 })
    );
    assert_eq!(
        "  ,X ".parse::<Grid>(),
        Err(MazeError::UnknownToken { row: 0, col: 1, token: "X ".into() })
    );
}

#[test]
fn find_markers() {
    let g = half_explored();
    assert_eq!(g.find(CellMarker::Start), Some(c(3, 2)));
    assert_eq!(g.find(CellMarker::Finish), Some(c(5, 0)));
    assert_eq!(g.find(CellMarker::Visited(10)), Some(c(1, 3)));
    assert_eq!(Grid::new(2, 2).find(CellMarker::Wall), None);
}

#[test]
fn set_rejects_out_of_range() {
    let mut g = Grid::new(2, 3);
    assert_eq!(g.set(c(2, 0), CellMarker::Wall), Err(MazeError::OutOfBounds { row: 2, col: 0 }));
    assert!(g.set(c(1, 2), CellMarker::Wall).is_ok());
}

#[test]
fn position_equality_is_by_coordinates() {
    let a = Position::labelled(c(1, 1), Label::Seq(1));
    let b = Position::labelled(c(1, 1), Label::Finish);
    assert!(a.same_cell(&b));
    assert_eq!(a, b);
    assert_ne!(a, Position::new(1, 2));
}

#[test]
fn pretty_string_is_boxed() {
    let mut g = Grid::new(1, 2);
    g.set(c(0, 0), CellMarker::Wall).unwrap();
    assert_eq!(g.to_pretty_string(false), "+----+\n|XX  |\n+----+\n");
}

#[test]
fn single_column_rows_of_empty_cells_survive_parsing() {
    let g: Grid = "SP\n  \nFP".parse().unwrap();
    assert_eq!((g.rows(), g.cols()), (3, 1));
    assert_eq!(g.get(c(1, 0)), Some(CellMarker::Empty));
    assert_eq!(g.to_text(), "SP\n  \nFP");

    let blank = Grid::new(3, 1);
    assert_eq!(blank.to_text().parse::<Grid>(), Ok(blank));
}

#[test]
fn iter_walks_row_major() {
    let g = half_explored();
    let cells: Vec<(Coord, CellMarker)> = g.iter().take(3).collect();
    assert_eq!(cells, vec![(c(0, 0), CellMarker::Empty), (c(0, 1), CellMarker::Wall), (c(0, 2), CellMarker::Empty)]);
    assert_eq!(g.iter().filter(|&(_, m)| m == CellMarker::Wall).count(), 9);
    assert_eq!(g.iter().count(), 30);
}

#[test]
fn position_accessors() {
    let p = Position::new(4, 2);
    assert_eq!((p.row(), p.col()), (4, 2));
    assert_eq!(p.label(), None);
    assert_eq!(p.parent(), None);
    assert!(p.children().is_empty());
}
