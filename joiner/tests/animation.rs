use framebuffer::{Canvas, Color, FrameBuffer};
use joiner::draw::{BACKGROUND, PALETTE};
use joiner::driver::FRAME_DELAY;
use joiner::error::ScheduleError;
use joiner::surface::{Point, Stroke};
use joiner::{Renderer, Scheduler, Surface};
use std::time::Duration;

/// Stands in for a host: remembers whether a frame was asked for
#[derive(Default)]
struct Host {
    pending: Option<Duration>,
    requests: usize,
}

impl Scheduler for Host {
    fn request_redraw(&mut self) -> Result<(), ScheduleError> {
        self.pending = Some(Duration::from_millis(0));
        self.requests += 1;
        Ok(())
    }

    fn request_redraw_after(&mut self, delay: Duration) -> Result<(), ScheduleError> {
        self.pending = Some(delay);
        self.requests += 1;
        Ok(())
    }
}

/// A surface that only counts what it's asked to draw
#[derive(Default)]
struct Counter {
    backgrounds: usize,
    arcs: usize,
    lines: usize,
}

impl Surface for Counter {
    fn width(&self) -> f32 {
        300.0
    }

    fn height(&self) -> f32 {
        300.0
    }

    fn fill_background(&mut self, _: Color) {
        self.backgrounds += 1;
    }

    fn stroke_arc(&mut self, _: Point, _: f32, _: f32, _: f32, _: &Stroke) {
        self.arcs += 1;
    }

    fn stroke_line(&mut self, _: Point, _: Point, _: &Stroke) {
        self.lines += 1;
    }
}

/// Renders frames for as long as the renderer keeps asking for them
fn pump(renderer: &mut Renderer, surface: &mut Counter, host: &mut Host) -> usize {
    let mut frames = 0;
    while host.pending.take().is_some() {
        renderer.render(surface, host);
        frames += 1;
        assert!(frames < 1000, "animation never settled");
    }
    frames
}

#[test]
fn one_tap_sweeps_one_node_and_stops() {
    let mut renderer = Renderer::new();
    let mut surface = Counter::default();
    let mut host = Host::default();

    assert!(renderer.handle_tap(&mut host));
    assert_eq!(renderer.sequence().current().state().drift(), 1.0);
    assert!(renderer.driver().is_running());
    assert_eq!(host.pending, Some(Duration::from_millis(0)));

    let frames = pump(&mut renderer, &mut surface, &mut host);
    assert!((150..=152).contains(&frames), "took {} frames", frames);

    assert!(!renderer.driver().is_running());
    assert_eq!(renderer.sequence().node(0).unwrap().state().progress(), 1.0);
    assert_eq!(renderer.sequence().current_index(), 1);
    assert!(!renderer.sequence().is_animating());

    assert_eq!(surface.backgrounds, frames);
    assert!(surface.arcs > 0);
    assert!(surface.lines > 0);
}

#[test]
fn taps_during_a_sweep_are_rejected() {
    let mut renderer = Renderer::new();
    let mut surface = Counter::default();
    let mut host = Host::default();

    assert!(renderer.handle_tap(&mut host));
    renderer.render(&mut surface, &mut host);
    assert!(!renderer.handle_tap(&mut host));
    assert_eq!(host.pending, Some(FRAME_DELAY));

    let progress = renderer.sequence().current().state().progress();
    renderer.render(&mut surface, &mut host);
    let advanced = renderer.sequence().current().state().progress() - progress;
    assert!((advanced - joiner::scale::STEP).abs() < 1e-6);
    assert_eq!(renderer.sequence().current().state().drift(), 1.0);
}

#[test]
fn repeated_taps_walk_the_chain_and_bounce() {
    let mut renderer = Renderer::new();
    let mut surface = Counter::default();
    let mut host = Host::default();

    let mut visited = vec![renderer.sequence().current_index()];
    for _ in 0..6 {
        assert!(renderer.handle_tap(&mut host));
        pump(&mut renderer, &mut surface, &mut host);
        visited.push(renderer.sequence().current_index());
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 3, 2, 1]);
    assert_eq!(renderer.sequence().direction(), -1);
}

#[test]
fn idle_frames_do_not_schedule_more() {
    let mut renderer = Renderer::new();
    let mut surface = Counter::default();
    let mut host = Host::default();

    renderer.render(&mut surface, &mut host);
    assert_eq!(host.requests, 0);
    assert_eq!(renderer.sequence().current().state().progress(), 0.0);
}

#[test]
fn frames_render_onto_a_framebuffer() {
    let mut renderer = Renderer::new();
    let mut canvas = Canvas::new(FrameBuffer::new(200, 200), BACKGROUND, Color::black());
    let mut host = Host::default();

    renderer.handle_tap(&mut host);
    // Run to the middle of the sweep, where the whole figure is visible
    for _ in 0..75 {
        renderer.render(&mut canvas, &mut host);
    }

    let outer = 200.0 / 6.9;
    let inner = 200.0 / 3.9;
    let red = PALETTE[0];

    assert_eq!(canvas.get_point(0, 0), Some(BACKGROUND));
    assert_eq!(canvas.get_point((100.0 + outer) as i64, 100), Some(red));
    assert_eq!(canvas.get_point(100, (100.0 - inner) as i64), Some(red));
    // Connector halfway between the rings on the +x axis
    let between = (100.0 + (outer + inner) / 2.0) as i64;
    assert_eq!(canvas.get_point(between, 100), Some(red));
    assert_eq!(canvas.get_point(100, 100), Some(BACKGROUND));
}
