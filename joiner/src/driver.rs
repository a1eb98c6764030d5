use crate::surface::Scheduler;
use log::{trace, warn};
use std::time::Duration;

/// Gap between two animation frames
pub const FRAME_DELAY: Duration = Duration::from_millis(20);

/// Returned by a frame callback to say whether the loop should keep going
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameControl {
    Continue,
    Stop,
}

/// Paces the animation. While running, every tick does one frame of work and
/// then asks the host for another frame `FRAME_DELAY` later. Nothing ever
/// blocks; a redraw the host refuses just means the loop stalls.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    running: bool,
}

impl AnimationDriver {
    pub fn new() -> AnimationDriver {
        AnimationDriver::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick<S, F>(&mut self, scheduler: &mut S, on_frame: F)
    where
        S: Scheduler + ?Sized,
        F: FnOnce() -> FrameControl,
    {
        if !self.running {
            return;
        }

        if on_frame() == FrameControl::Stop {
            self.stop();
            return;
        }

        trace!("scheduling next frame in {:?}", FRAME_DELAY);
        if let Err(err) = scheduler.request_redraw_after(FRAME_DELAY) {
            warn!("dropped animation frame: {}", err);
        }
    }

    /// Kicks off the loop with an immediate redraw, unless it's already going
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.running {
            return;
        }

        self.running = true;
        if let Err(err) = scheduler.request_redraw() {
            warn!("could not start animation: {}", err);
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}
