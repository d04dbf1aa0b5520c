use common::coordinates::Square;
use smallvec::SmallVec;

use super::path::{Path, Step};

pub type NodeId = usize;

/// One ply reachable from a piece's origin. `captured` is set only when the
/// node was reached by a jump.
#[derive(Clone, Debug)]
pub struct Node {
    pub position: Square,
    pub captured: Option<Square>,
    children: SmallVec<[NodeId; 4]>,
}

impl Node {
    fn new(position: Square, captured: Option<Square>) -> Self {
        Self {
            position,
            captured,
            children: SmallVec::new(),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn step(&self) -> Step {
        Step::new(self.position, self.captured)
    }
}

/// Arena holding every continuation of one piece. Node 0 is the root, the
/// piece's current square.
#[derive(Clone, Debug)]
pub struct MoveTree {
    nodes: Vec<Node>,
}

impl MoveTree {
    pub const ROOT: NodeId = 0;

    pub fn new(origin: Square) -> Self {
        Self {
            nodes: vec![Node::new(origin, None)],
        }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_child(
        &mut self,
        parent: NodeId,
        position: Square,
        captured: Option<Square>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(position, captured));
        self.nodes[parent].children.push(id);
        id
    }

    /// Flattens the tree into root-to-leaf paths. Wherever a node has any
    /// capturing continuation, its non-capturing ones are dropped.
    pub fn to_paths(&self) -> Vec<Path> {
        self.reversed_paths(Self::ROOT)
            .into_iter()
            .map(Path::from_reversed)
            .collect()
    }

    // Paths are built leaf-first so each level appends rather than prepends.
    fn reversed_paths(&self, id: NodeId) -> Vec<Vec<Step>> {
        let node = &self.nodes[id];
        if node.is_leaf() {
            return vec![vec![node.step()]];
        }

        let mut paths = Vec::new();
        for &child in node.children() {
            for mut path in self.reversed_paths(child) {
                path.push(node.step());
                paths.push(path);
            }
        }

        if paths.iter().any(|path| path.iter().any(Step::is_capture)) {
            paths.retain(|path| path.iter().any(Step::is_capture));
        }

        paths
    }
}
