use crate::draw::BACKGROUND;
use crate::driver::{AnimationDriver, FrameControl};
use crate::sequence::{Sequence, SequenceEvent};
use crate::surface::{Scheduler, Surface};
use log::debug;

/// Glues the sequence to its host: draws a frame, drives the animation, and
/// turns taps into sweeps. Each tap animates exactly one node; the driver
/// stops as soon as control passes to the next one.
#[derive(Debug, Default)]
pub struct Renderer {
    sequence: Sequence,
    driver: AnimationDriver,
}

impl Renderer {
    pub fn new() -> Renderer {
        Renderer::default()
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn render<S, C>(&mut self, surface: &mut S, scheduler: &mut C)
    where
        S: Surface + ?Sized,
        C: Scheduler + ?Sized,
    {
        surface.fill_background(BACKGROUND);
        self.sequence.draw(surface);

        let sequence = &mut self.sequence;
        self.driver.tick(scheduler, || match sequence.update() {
            SequenceEvent::Advanced { .. } => FrameControl::Stop,
            SequenceEvent::Idle | SequenceEvent::Stepped => FrameControl::Continue,
        });
    }

    /// Starts a sweep of the current node. Taps that arrive while a sweep is
    /// running are dropped and return false.
    pub fn handle_tap<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) -> bool {
        if !self.sequence.start_updating() {
            debug!("ignoring tap, node {} is still animating", self.sequence.current_index());
            return false;
        }

        debug!(
            "tap starts node {} with drift {}",
            self.sequence.current_index(),
            self.sequence.current().state().drift()
        );
        self.driver.start(scheduler);
        true
    }
}
