pub mod error;
pub mod grid;
pub mod logger;
pub mod position;
pub mod solver;
pub mod tree;

pub use error::MazeError;
pub use grid::{CellMarker, Direction, Grid};
pub use position::{Coord, Label, NodeId, Position};
pub use solver::{Algorithm, Bfs, Dfs, Outcome, Search};
pub use tree::ExplorationTree;
