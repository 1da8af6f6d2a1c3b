use super::*;

use entries::Entry;
use wheel::{SpinError, SpinResult, WheelState};

/// Time source for the animation, in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

impl Clock for Timer {
    fn now(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn advance(&self, delta: f64) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

pub trait SpinHooks {
    fn on_tick(&mut self, state: &WheelState);
    fn on_complete(&mut self, index: usize, winner: &Entry);
}

/// [SpinHooks] made of two closures
pub struct Hooks<T, C> {
    pub on_tick: T,
    pub on_complete: C,
}

impl<T, C> SpinHooks for Hooks<T, C>
where
    T: FnMut(&WheelState),
    C: FnMut(usize, &Entry),
{
    fn on_tick(&mut self, state: &WheelState) {
        (self.on_tick)(state)
    }
    fn on_complete(&mut self, index: usize, winner: &Entry) {
        (self.on_complete)(index, winner)
    }
}

#[derive(Debug, Clone)]
struct Spin {
    result: SpinResult,
    winner: Entry,
    start_rotation: f64,
    start_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spinning,
}

/// Whether the host should keep delivering frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Done,
}

pub struct SpinController<C> {
    clock: C,
    config: config::Spin,
    current: Option<Spin>,
}

impl<C: Clock> SpinController<C> {
    pub fn new(clock: C, config: config::Spin) -> Self {
        Self {
            clock,
            config,
            current: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.current {
            Some(_) => Phase::Spinning,
            None => Phase::Idle,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.current.is_some()
    }

    /// Drops any spin in flight without completing it
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Starts a spin. The state is not touched until the next [tick](Self::tick).
    pub fn spin(
        &mut self,
        state: &WheelState,
        rng: &mut impl Rng,
    ) -> Result<SpinResult, SpinError> {
        if self.current.is_some() {
            return Err(SpinError::AlreadySpinning);
        }
        let result = wheel::plan_spin(state, &self.config, rng)?;
        let winner = state
            .entries
            .get(result.winner_index)
            .ok_or(SpinError::NoEntries)?
            .clone();
        log::debug!(
            "spinning {:.1} -> {:.1}, winner #{} {winner:?}",
            state.rotation_degrees,
            result.final_rotation_degrees,
            result.winner_index,
        );
        self.current = Some(Spin {
            result,
            winner,
            start_rotation: state.rotation_degrees,
            start_time: self.clock.now(),
        });
        Ok(result)
    }

    fn progress_of(&self, spin: &Spin) -> f32 {
        if self.config.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = (self.clock.now() - spin.start_time) as f32;
        (elapsed / self.config.duration).clamp(0.0, 1.0)
    }

    /// Moves the wheel to where it should be right now.
    pub fn tick(&mut self, state: &mut WheelState, hooks: &mut impl SpinHooks) -> Tick {
        let Some(spin) = &self.current else {
            return Tick::Done;
        };
        let progress = self.progress_of(spin);
        state.rotation_degrees = rotation_at(
            spin.start_rotation,
            spin.result.final_rotation_degrees,
            progress,
        );
        hooks.on_tick(state);
        if progress < 1.0 {
            return Tick::Continue;
        }
        let Some(spin) = self.current.take() else {
            return Tick::Done;
        };
        state.rotation_degrees = spin.result.final_rotation_degrees;
        log::info!("winner: {}", spin.winner);
        hooks.on_complete(spin.result.winner_index, &spin.winner);
        Tick::Done
    }
}

pub fn rotation_at(start: f64, end: f64, progress: f32) -> f64 {
    start + (end - start) * ease_out_quart(progress) as f64
}
