use std::collections::VecDeque;

use anyhow::Result;
use log::{debug, info};

use crate::{
    grid::Grid,
    logger::StepSink,
    position::{Coord, Label, NodeId, Position},
    tree::ExplorationTree,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm { Bfs, Dfs }

impl Algorithm {
    pub fn searcher(self) -> Box<dyn Search> {
        match self {
            Algorithm::Bfs => Box::new(Bfs::new()),
            Algorithm::Dfs => Box::new(Dfs::new()),
        }
    }
}

/// Result of a search: the whole exploration tree, or nothing when the finish is unreachable.
#[derive(Clone, Debug)]
pub enum Outcome {
    Found(ExplorationTree),
    NotFound,
}

impl Outcome {
    pub fn is_found(&self) -> bool { matches!(self, Outcome::Found(_)) }

    pub fn tree(&self) -> Option<&ExplorationTree> {
        match self { Outcome::Found(t) => Some(t), Outcome::NotFound => None }
    }

    pub fn into_tree(self) -> Option<ExplorationTree> {
        match self { Outcome::Found(t) => Some(t), Outcome::NotFound => None }
    }
}

/// Builds an exploration tree over `grid` from `start` until `finish` turns up.
///
/// `grid` is written as positions are accepted and `sink` sees it after every
/// change. Errors only come from the sink; an unreachable finish is
/// [`Outcome::NotFound`].
pub trait Search {
    fn name(&self) -> &str;
    fn solve(&mut self, grid: &mut Grid, start: &Position, finish: Coord, sink: &mut dyn StepSink) -> Result<Outcome>;
}

/// Sequence labels for one search call, starting at 1.
#[derive(Debug, Clone, Copy)]
pub struct LabelCounter { last: u32 }

impl LabelCounter {
    pub fn new() -> Self { Self { last: 0 } }

    pub fn next_label(&mut self) -> Label {
        self.last += 1;
        Label::Seq(self.last)
    }

    pub fn issued(&self) -> u32 { self.last }
}

impl Default for LabelCounter {
    fn default() -> Self { Self::new() }
}

enum Accepted { Finish, Node(NodeId) }

/// State owned by a single search call.
struct Run<'a, 's> {
    grid: &'a mut Grid,
    sink: &'a mut (dyn StepSink + 's),
    tree: ExplorationTree,
    labels: LabelCounter,
    finish: Coord,
}

impl<'a, 's> Run<'a, 's> {
    fn new(grid: &'a mut Grid, sink: &'a mut (dyn StepSink + 's), start: &Position, finish: Coord) -> Result<Self> {
        let root = Position::labelled(start.coord(), start.label().unwrap_or(Label::Start));
        sink.step("Initialization", &*grid)?;
        Ok(Self { grid, sink, tree: ExplorationTree::with_root(root), labels: LabelCounter::new(), finish })
    }

    fn mark(&mut self, id: NodeId) -> Result<()> {
        let p = self.tree.get(id);
        if self.grid.mark(p) {
            let title = format!("Mark {}", p);
            self.sink.step(&title, &*self.grid)?;
        }
        Ok(())
    }

    fn probe(&self, cur: NodeId) -> Vec<Position> {
        let at = self.tree.get(cur).coord();
        self.grid.neighbors_toward(at, Some(self.finish)).into_iter()
            .map(|c| Position::child_of(c, Some(cur)))
            .collect()
    }

    fn accept(&mut self, parent: NodeId, child: Position) -> Result<Accepted> {
        if child == self.finish {
            let id = self.tree.attach(parent, child, Label::Finish);
            self.mark(id)?;
            return Ok(Accepted::Finish);
        }
        let label = self.labels.next_label();
        let id = self.tree.attach(parent, child, label);
        self.mark(id)?;
        Ok(Accepted::Node(id))
    }

    fn found(self, algo: &str) -> Outcome {
        info!("{algo}: finish {} reached after {} labels ({} nodes)", self.finish, self.labels.issued(), self.tree.len());
        Outcome::Found(self.tree)
    }

    fn exhausted(self, algo: &str) -> Outcome {
        info!("{algo}: finish {} not reachable, explored {} nodes", self.finish, self.tree.len());
        Outcome::NotFound
    }
}

/// Breadth-first: FIFO frontier, so the finish sits at the minimum step count from the start.
#[derive(Debug, Default)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self { Self }
}

impl Search for Bfs {
    fn name(&self) -> &str { "BFS" }

    fn solve(&mut self, grid: &mut Grid, start: &Position, finish: Coord, sink: &mut dyn StepSink) -> Result<Outcome> {
        let mut run = Run::new(grid, sink, start, finish)?;
        let mut frontier = VecDeque::from([run.tree.root()]);
        while let Some(cur) = frontier.pop_front() {
            run.mark(cur)?;
            debug!("BFS expand {} (frontier {})", run.tree.get(cur), frontier.len());
            for child in run.probe(cur) {
                match run.accept(cur, child)? {
                    Accepted::Finish => return Ok(run.found(self.name())),
                    Accepted::Node(id) => frontier.push_back(id),
                }
            }
        }
        Ok(run.exhausted(self.name()))
    }
}

/// Depth-first: every legal neighbour of a node is accepted, then each is
/// descended into in discovery order before the next sibling.
///
/// Recursion depth grows with the number of reachable cells.
#[derive(Debug, Default)]
pub struct Dfs;

impl Dfs {
    pub fn new() -> Self { Self }
}

impl Search for Dfs {
    fn name(&self) -> &str { "DFS" }

    fn solve(&mut self, grid: &mut Grid, start: &Position, finish: Coord, sink: &mut dyn StepSink) -> Result<Outcome> {
        fn descend(run: &mut Run<'_, '_>, cur: NodeId, depth: usize) -> Result<bool> {
            run.mark(cur)?;
            debug!("DFS expand {} at depth {}", run.tree.get(cur), depth);
            let mut accepted = Vec::new();
            for child in run.probe(cur) {
                match run.accept(cur, child)? {
                    Accepted::Finish => return Ok(true),
                    Accepted::Node(id) => accepted.push(id),
                }
            }
            for id in accepted {
                if descend(run, id, depth + 1)? { return Ok(true); }
            }
            Ok(false)
        }

        let mut run = Run::new(grid, sink, start, finish)?;
        let root = run.tree.root();
        if descend(&mut run, root, 0)? { Ok(run.found(self.name())) } else { Ok(run.exhausted(self.name())) }
    }
}
