use clap::Parser;

/// Largest width or height the host will allocate a canvas for
pub const MAX_DIMENSION: u32 = 16384;

/// Animates a chain of concentric circle joiners. Every byte read from stdin
/// is a tap; every frame is written to stdout as a binary PPM image.
#[derive(Clone, Debug, Parser, PartialEq)]
#[command(name = "joiner", version)]
pub struct Config {
    /// Width of the canvas in pixels
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub width: u32,

    /// Height of the canvas in pixels
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub height: u32,

    /// Stop after writing this many frames
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Tap once at startup, without waiting for input
    #[arg(long)]
    pub autotap: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            width: 400,
            height: 400,
            max_frames: None,
            autotap: false,
        }
    }
}
