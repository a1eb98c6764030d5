//! A chain of concentric circle joiners that animate one node per tap.
//!
//! `Renderer` is the entry point: hosts call `render` whenever a frame is due
//! and `handle_tap` on every tap, and supply drawing and scheduling through
//! the `Surface` and `Scheduler` traits. `host` runs the whole thing against
//! a `framebuffer::Canvas`.

pub mod config;
pub mod draw;
pub mod driver;
pub mod error;
pub mod host;
pub mod node;
pub mod renderer;
pub mod scale;
pub mod sequence;
pub mod surface;

pub use crate::config::Config;
pub use crate::renderer::Renderer;
pub use crate::surface::{Scheduler, Surface};
