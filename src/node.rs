use std::hash::{Hash, Hasher};
use crate::board::{Board, Direction};

/// Handle of a node inside a `NodeArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct Node {
    pub board: Board,
    pub parent: Option<NodeId>,
    pub direction: Option<Direction>,
    pub cost: u32,
}

// Nodes are interchangeable when their boards match, wherever they sit in the tree.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

/// Owns every node of one search. Parents are referenced by handle, so the
/// whole tree is freed when the arena is dropped.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self, board: Board) -> NodeId {
        self.push(Node {
            board,
            parent: None,
            direction: None,
            cost: 0,
        })
    }

    pub fn child(&mut self, parent: NodeId, board: Board, direction: Direction) -> NodeId {
        let cost = self[parent].cost + 1;
        self.push(Node {
            board,
            parent: Some(parent),
            direction: Some(direction),
            cost,
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node allocated after the first `len`. Depth-first searches
    /// use this to discard a subtree once they backtrack out of it.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Moves from the root to `id`.
    pub fn path(&self, id: NodeId) -> Vec<Direction> {
        let mut path: Vec<Direction> = Vec::with_capacity(self[id].cost as usize);
        let mut current = id;

        while let Some(parent) = self[current].parent {
            if let Some(direction) = self[current].direction {
                path.push(direction);
            }
            current = parent;
        }

        // Collected goal-first.
        path.reverse();
        path
    }

    /// Allocates a child for every legal move out of `id`. With `avoid_reverse`
    /// the move undoing the one that produced `id` is skipped.
    pub fn expand(&mut self, id: NodeId, avoid_reverse: bool) -> Vec<NodeId> {
        let forbidden = match self[id].direction {
            Some(direction) if avoid_reverse => Some(direction.inverse()),
            _ => None,
        };

        let successors = self[id].board.generate_successors(forbidden);

        successors
            .into_iter()
            .map(|(board, direction)| self.child(id, board, direction))
            .collect()
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
