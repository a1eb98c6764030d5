use std::io;
use thiserror::Error;

/// Why a host could not queue a redraw
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("the host is no longer accepting redraws")]
    Closed,
    #[error("a redraw {0:?} from now cannot be represented")]
    OutOfRange(std::time::Duration),
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),
    #[error("failed to start the input thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("a {0}x{1} canvas is outside the supported size")]
    CanvasSize(u32, u32),
    #[error("could not schedule the first frame: {0}")]
    Schedule(#[from] ScheduleError),
}
