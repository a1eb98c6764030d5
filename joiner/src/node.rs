use crate::draw::{self, NODE_COUNT};
use crate::scale::ScaleState;
use crate::surface::Surface;
use std::ops::{Index, IndexMut};

/// Position of a node inside its chain
pub type NodeId = usize;

/// Where a step along the chain ended up
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Traversal {
    Moved(NodeId),
    /// There is no neighbor that way; the caller stays put
    Exhausted,
}

/// One joiner in the chain. `next` is the link that brought the following
/// node into existence, `prev` only points back at whoever created this one.
#[derive(Debug)]
pub struct Node {
    color_index: usize,
    state: ScaleState,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl Node {
    fn new(color_index: usize, prev: Option<NodeId>) -> Node {
        Node {
            color_index,
            state: ScaleState::new(),
            prev,
            next: None,
        }
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn state(&self) -> &ScaleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ScaleState {
        &mut self.state
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        draw::draw_node(surface, self.color_index, self.state.progress());
    }

    /// Steps backwards for a negative direction and forwards otherwise
    pub fn advance_or_signal(&self, direction: i8) -> Traversal {
        let neighbor = if direction == -1 { self.prev } else { self.next };
        match neighbor {
            Some(id) => Traversal::Moved(id),
            None => Traversal::Exhausted,
        }
    }
}

/// Every node of the sequence, one per drawable palette color. The chain is
/// built in full up front and never changes shape afterwards.
#[derive(Debug)]
pub struct Chain {
    nodes: Vec<Node>,
}

impl Chain {
    pub fn new() -> Chain {
        let mut chain = Chain {
            nodes: Vec::with_capacity(NODE_COUNT),
        };
        chain.nodes.push(Node::new(0, None));

        let mut tail = 0;
        while let Some(next) = chain.ensure_next(tail) {
            tail = next;
        }

        chain
    }

    /// Returns the node after `id`, creating it if this isn't the last color
    fn ensure_next(&mut self, id: NodeId) -> Option<NodeId> {
        let node = &self.nodes[id];
        if node.next.is_some() {
            return node.next;
        }

        if node.color_index + 1 >= NODE_COUNT {
            return None;
        }

        let next = self.nodes.len();
        let color_index = node.color_index + 1;
        self.nodes.push(Node::new(color_index, Some(id)));
        self.nodes[id].next = Some(next);
        Some(next)
    }

    pub fn first(&self) -> NodeId {
        0
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

impl Index<NodeId> for Chain {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl IndexMut<NodeId> for Chain {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }
}

impl Default for Chain {
    fn default() -> Chain {
        Chain::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_has_one_node_per_drawable_color() {
        let chain = Chain::new();
        assert_eq!(chain.len(), NODE_COUNT);
        assert!(!chain.is_empty());

        let indices: Vec<usize> = chain.iter().map(Node::color_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn links_run_both_ways() {
        let chain = Chain::new();
        for id in 0..chain.len() {
            let node = chain.get(id).unwrap();
            if let Some(next) = node.next() {
                assert_eq!(chain.get(next).unwrap().prev(), Some(id));
            }
        }

        let first = chain.get(chain.first()).unwrap();
        assert_eq!(first.prev(), None);
        assert_eq!(chain.get(NODE_COUNT - 1).unwrap().next(), None);
    }

    #[test]
    fn ensure_next_is_idempotent() {
        let mut chain = Chain::new();
        assert_eq!(chain.ensure_next(0), Some(1));
        assert_eq!(chain.ensure_next(NODE_COUNT - 1), None);
        assert_eq!(chain.len(), NODE_COUNT);
    }

    #[test]
    fn ends_of_the_chain_are_exhausted() {
        let chain = Chain::new();
        let first = chain.get(0).unwrap();
        assert_eq!(first.advance_or_signal(-1), Traversal::Exhausted);
        assert_eq!(first.advance_or_signal(1), Traversal::Moved(1));

        let last = chain.get(NODE_COUNT - 1).unwrap();
        assert_eq!(last.advance_or_signal(1), Traversal::Exhausted);
        assert_eq!(last.advance_or_signal(-1), Traversal::Moved(NODE_COUNT - 2));
    }
}
