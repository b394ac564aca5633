use std::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{grid::Grid, position::{Coord, Label, NodeId, Position}};

/// Arena-backed exploration tree. Nodes are stored in acceptance order, so
/// the root is always the first node.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExplorationTree {
    nodes: Vec<Position>,
    finish: Option<NodeId>,
}

/// One pre-order entry of [`ExplorationTree::shape`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeShape {
    pub label: String,
    pub coord: Coord,
    pub children: Vec<String>,
}

impl ExplorationTree {
    pub(crate) fn with_root(mut root: Position) -> Self {
        root.parent = None;
        root.children.clear();
        Self { nodes: vec![root], finish: None }
    }

    pub fn root(&self) -> NodeId { NodeId(0) }

    pub fn get(&self, id: NodeId) -> &Position { &self.nodes[id.0] }

    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn children(&self, id: NodeId) -> &[NodeId] { &self.nodes[id.0].children }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> { self.nodes[id.0].parent }

    /// Node that reached the finish cell, if the search got there.
    pub fn finish(&self) -> Option<NodeId> { self.finish }

    /// Nodes in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Position)> + '_ {
        self.nodes.iter().enumerate().map(|(i, p)| (NodeId(i), p))
    }

    pub fn find(&self, c: Coord) -> Option<NodeId> { self.iter().find(|(_, p)| **p == c).map(|(id, _)| id) }

    pub fn find_label(&self, label: Label) -> Option<NodeId> {
        self.iter().find(|(_, p)| p.label() == Some(label)).map(|(id, _)| id)
    }

    /// Links `child` under `parent`, labelling it, and returns its id.
    pub(crate) fn attach(&mut self, parent: NodeId, mut child: Position, label: Label) -> NodeId {
        let id = NodeId(self.nodes.len());
        child.parent = Some(parent);
        child.set_label(label);
        self.nodes.push(child);
        self.nodes[parent.0].children.push(id);
        if label == Label::Finish { self.finish = Some(id); }
        id
    }

    /// Number of edges between the root and `id`.
    pub fn depth(&self, id: NodeId) -> usize { self.ancestors(id).count() }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Coordinates from the root down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Coord> {
        let mut path: Vec<Coord> = std::iter::once(id).chain(self.ancestors(id)).map(|n| self.get(n).coord()).collect();
        path.reverse();
        path
    }

    /// Node ids in pre-order (parent before children, children in discovery order).
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    /// Writes every node's label onto `grid`, walking the tree in pre-order.
    pub fn paint(&self, grid: &mut Grid) {
        for id in self.preorder() { grid.mark(self.get(id)); }
    }

    fn label_of(&self, id: NodeId) -> String {
        self.get(id).label().map(|l| l.to_string()).unwrap_or_else(|| "??".into())
    }

    /// Structural listing used to compare trees: label, coordinate and child labels per node.
    pub fn shape(&self) -> Vec<NodeShape> {
        self.preorder().into_iter()
            .map(|id| NodeShape {
                label: self.label_of(id),
                coord: self.get(id).coord(),
                children: self.children(id).iter().map(|&c| self.label_of(c)).collect(),
            })
            .collect()
    }

    /// Indented outline, one node per line.
    pub fn to_outline(&self) -> String {
        let mut s = String::new();
        for id in self.preorder() {
            let p = self.get(id);
            let _ = writeln!(s, "{}{} {}", "  ".repeat(self.depth(id)), self.label_of(id), p.coord());
        }
        s
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string_pretty(self) }
}
