//! Runs a `Renderer` against a software framebuffer. Taps come in over a
//! channel and frames go out as PPM images.

use crate::config::{Config, MAX_DIMENSION};
use crate::draw::BACKGROUND;
use crate::error::{HostError, ScheduleError};
use crate::renderer::Renderer;
use crate::surface::Scheduler;
use crossbeam_channel::{select, Receiver};
use framebuffer::{Canvas, Color, FrameBuffer};
use log::{debug, info, trace, warn};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

/// Keeps track of when the next frame is due. Several requests collapse
/// into whichever one is due first.
#[derive(Debug, Default)]
pub struct FrameClock {
    deadline: Option<Instant>,
    closed: bool,
}

impl FrameClock {
    pub fn new() -> FrameClock {
        FrameClock::default()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Forgets the pending deadline, ready for the frame about to be drawn
    pub fn take(&mut self) -> Option<Instant> {
        self.deadline.take()
    }

    /// Refuses every redraw from now on
    pub fn close(&mut self) {
        self.closed = true;
        self.deadline = None;
    }

    fn schedule_at(&mut self, at: Instant) -> Result<(), ScheduleError> {
        if self.closed {
            return Err(ScheduleError::Closed);
        }

        self.deadline = Some(match self.deadline {
            Some(current) => current.min(at),
            None => at,
        });
        Ok(())
    }
}

impl Scheduler for FrameClock {
    fn request_redraw(&mut self) -> Result<(), ScheduleError> {
        self.schedule_at(Instant::now())
    }

    fn request_redraw_after(&mut self, delay: Duration) -> Result<(), ScheduleError> {
        let at = Instant::now()
            .checked_add(delay)
            .ok_or(ScheduleError::OutOfRange(delay))?;
        self.schedule_at(at)
    }
}

/// Reads `input` on a background thread, sending one tap per byte. The
/// channel disconnects once the input hits end of file.
pub fn spawn_tap_reader<R>(mut input: R) -> Result<Receiver<()>, HostError>
where
    R: io::Read + Send + 'static,
{
    let (sender, receiver) = crossbeam_channel::unbounded();
    thread::Builder::new()
        .name("tap-reader".to_string())
        .spawn(move || {
            let mut byte = [0; 1];
            loop {
                match input.read(&mut byte) {
                    Ok(0) => break,
                    Ok(_) => {
                        if sender.send(()).is_err() {
                            break;
                        }
                    }
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => {
                        warn!("stopped reading taps: {}", err);
                        break;
                    }
                }
            }
        })
        .map_err(HostError::Spawn)?;

    Ok(receiver)
}

/// Drives the animation until the taps run out and it has come to rest, or
/// until `max_frames` frames have been written. Returns the frame count.
pub fn run<W: io::Write>(
    config: &Config,
    taps: Receiver<()>,
    output: &mut W,
) -> Result<u64, HostError> {
    let fits = |side: u32| (1..=MAX_DIMENSION).contains(&side);
    if !fits(config.width) || !fits(config.height) {
        return Err(HostError::CanvasSize(config.width, config.height));
    }

    let buffer = FrameBuffer::new(config.width, config.height);
    let mut canvas = Canvas::new(buffer, BACKGROUND, Color::black());
    let mut renderer = Renderer::new();
    let mut clock = FrameClock::new();

    info!("starting {}x{} canvas", config.width, config.height);
    clock.request_redraw()?;
    if config.autotap {
        renderer.handle_tap(&mut clock);
    }

    let mut taps = taps;
    let mut input_open = true;
    let mut frames = 0;
    loop {
        if config.max_frames.map_or(false, |limit| frames >= limit) {
            debug!("reached the frame limit");
            break;
        }

        let timer = match clock.deadline() {
            Some(at) => crossbeam_channel::at(at),
            None if input_open => crossbeam_channel::never(),
            None => break,
        };

        select! {
            recv(taps) -> tap => match tap {
                Ok(()) => {
                    renderer.handle_tap(&mut clock);
                }
                Err(_) => {
                    debug!("input closed");
                    input_open = false;
                }
            },
            recv(timer) -> _ => {
                clock.take();
                renderer.render(&mut canvas, &mut clock);
                canvas.buffer().write(output)?;
                frames += 1;
                trace!("wrote frame {}", frames);
            },
        }

        if !input_open {
            taps = crossbeam_channel::never();
        }
    }

    clock.close();
    info!("finished after {} frames", frames);
    Ok(frames)
}
