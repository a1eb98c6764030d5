use crate::node::{Chain, Node, NodeId, Traversal};
use crate::scale::StepOutcome;
use crate::surface::Surface;
use log::debug;

/// What a single `Sequence::update` did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SequenceEvent {
    Idle,
    Stepped,
    /// The current node finished its sweep and control moved on. When the
    /// chain ran out in the travel direction `from == to` and `bounced` is set.
    Advanced {
        from: NodeId,
        to: NodeId,
        bounced: bool,
    },
}

/// The chain of joiners together with the one currently on screen and the
/// direction control passes along the chain.
#[derive(Debug)]
pub struct Sequence {
    chain: Chain,
    current: NodeId,
    direction: i8,
}

impl Sequence {
    pub fn new() -> Sequence {
        let chain = Chain::new();
        let current = chain.first();
        Sequence {
            chain,
            current,
            direction: 1,
        }
    }

    pub fn current(&self) -> &Node {
        &self.chain[self.current]
    }

    pub fn current_index(&self) -> NodeId {
        self.current
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.chain.get(id)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        !self.current().state().is_idle()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.current().draw(surface);
    }

    /// Ticks the current node, handing control to its neighbor once it
    /// completes. Running off either end flips the direction instead.
    pub fn update(&mut self) -> SequenceEvent {
        let from = self.current;
        match self.chain[from].state_mut().update() {
            StepOutcome::Idle => SequenceEvent::Idle,
            StepOutcome::Stepped => SequenceEvent::Stepped,
            StepOutcome::Completed(anchor) => {
                let (to, bounced) = match self.chain[from].advance_or_signal(self.direction) {
                    Traversal::Moved(id) => (id, false),
                    Traversal::Exhausted => {
                        self.direction = -self.direction;
                        (from, true)
                    }
                };

                debug!(
                    "node {} settled at {}, moving to node {} (direction {})",
                    from, anchor, to, self.direction
                );
                self.current = to;
                SequenceEvent::Advanced { from, to, bounced }
            }
        }
    }

    /// Starts the current node's sweep. False if it is already running.
    pub fn start_updating(&mut self) -> bool {
        self.chain[self.current].state_mut().start_updating()
    }
}

impl Default for Sequence {
    fn default() -> Sequence {
        Sequence::new()
    }
}
