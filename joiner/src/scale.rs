/// Number of phases a single node sweep is split into
pub const PARTS: usize = 3;

/// Progress added to an animating state on every tick
pub const STEP: f32 = 0.02 / PARTS as f32;

/// What a single `ScaleState::update` did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// Nothing is animating, so nothing changed
    Idle,
    /// Progress moved by one step and the sweep is still running
    Stepped,
    /// The sweep finished; carries the new anchor (0 or 1)
    Completed(f32),
}

/// Normalized progress of one node, along with the direction it's heading.
///
/// A state is idle whenever its drift is zero. Starting a sweep picks the
/// drift from the anchor, so a node that ended at 1 runs back to 0 next time
/// and the other way round.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleState {
    progress: f32,
    drift: f32,
    anchor: f32,
}

impl ScaleState {
    pub fn new() -> ScaleState {
        ScaleState::default()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn drift(&self) -> f32 {
        self.drift
    }

    pub fn anchor(&self) -> f32 {
        self.anchor
    }

    pub fn is_idle(&self) -> bool {
        self.drift == 0.0
    }

    /// Advances the progress by one step. Once it has moved more than a full
    /// unit away from the anchor it snaps onto the far end and goes idle.
    pub fn update(&mut self) -> StepOutcome {
        if self.is_idle() {
            return StepOutcome::Idle;
        }

        self.progress += self.drift * STEP;
        if (self.progress - self.anchor).abs() > 1.0 {
            self.progress = self.anchor + self.drift;
            self.drift = 0.0;
            self.anchor = self.progress;
            return StepOutcome::Completed(self.anchor);
        }

        StepOutcome::Stepped
    }

    /// Begins a sweep away from the anchor. Returns false, changing nothing,
    /// when a sweep is already running.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }

        self.drift = 1.0 - 2.0 * self.anchor;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(state: &mut ScaleState) -> usize {
        let mut ticks = 0;
        loop {
            ticks += 1;
            match state.update() {
                StepOutcome::Stepped => continue,
                StepOutcome::Completed(_) => return ticks,
                StepOutcome::Idle => panic!("state went idle without completing"),
            }
        }
    }

    #[test]
    fn idle_state_does_not_move() {
        let mut state = ScaleState::new();
        assert_eq!(state.update(), StepOutcome::Idle);
        assert_eq!(state.progress(), 0.0);
        assert!(state.is_idle());
    }

    #[test]
    fn start_from_zero_drifts_forward() {
        let mut state = ScaleState::new();
        assert!(state.start_updating());
        assert_eq!(state.drift(), 1.0);
    }

    #[test]
    fn second_start_is_ignored() {
        let mut state = ScaleState::new();
        assert!(state.start_updating());
        assert!(!state.start_updating());
        assert_eq!(state.drift(), 1.0);

        state.update();
        assert_eq!(state.progress(), STEP);
    }

    #[test]
    fn each_update_adds_one_step() {
        let mut state = ScaleState::new();
        state.start_updating();

        for tick in 1..=10 {
            assert_eq!(state.update(), StepOutcome::Stepped);
            let expected = STEP * tick as f32;
            assert!((state.progress() - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn forward_sweep_completes_once_and_snaps_to_one() {
        let mut state = ScaleState::new();
        state.start_updating();

        let ticks = run_to_completion(&mut state);
        assert!((150..=152).contains(&ticks), "took {} ticks", ticks);
        assert_eq!(state.progress(), 1.0);
        assert_eq!(state.anchor(), 1.0);
        assert!(state.is_idle());

        // Nothing else fires until a new sweep is started
        assert_eq!(state.update(), StepOutcome::Idle);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn completed_sweep_reverses_next_time() {
        let mut state = ScaleState::new();
        state.start_updating();
        run_to_completion(&mut state);

        assert!(state.start_updating());
        assert_eq!(state.drift(), -1.0);

        run_to_completion(&mut state);
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.anchor(), 0.0);
    }
}
