//! Wheel state and the angle math for landing a chosen slice under the pointer.
//!
//! Angles are degrees, measured clockwise from east (canvas convention),
//! so the pointer at the top of the wheel sits at 270.

use super::*;

use entries::{Entry, EntryList};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SpinError {
    #[error("the wheel is already spinning")]
    AlreadySpinning,
    #[error("there is nothing on the wheel")]
    NoEntries,
    #[error("the last winner has not been confirmed yet")]
    WinnerPending,
}

#[derive(Debug, Clone)]
pub struct WheelState {
    /// Grows with every spin, only the value mod 360 matters for drawing
    pub rotation_degrees: f64,
    pub entries: EntryList,
}

impl WheelState {
    pub fn new(max_entries: usize) -> Self {
        Self {
            rotation_degrees: 0.0,
            entries: EntryList::new(max_entries),
        }
    }

    pub fn slice_angle(&self) -> Option<f64> {
        slice_angle(self.entries.len())
    }

    /// Removes every entry and puts the wheel back to its initial position
    pub fn clear(&mut self) {
        self.entries.clear();
        self.rotation_degrees = 0.0;
    }

    /// Slot currently under the pointer
    pub fn under_pointer(&self, pointer_angle: f64) -> Option<(usize, &Entry)> {
        let index = slice_under_pointer(self.rotation_degrees, self.entries.len(), pointer_angle)?;
        self.entries.get(index).map(|entry| (index, entry))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinResult {
    pub winner_index: usize,
    pub final_rotation_degrees: f64,
}

pub fn slice_angle(count: usize) -> Option<f64> {
    (count > 0).then(|| 360.0 / count as f64)
}

/// Rotation (mod 360) that puts `offset` degrees into slice `index` under the pointer
pub fn stop_angle(index: usize, slice_angle: f64, offset: f64, pointer_angle: f64) -> f64 {
    pointer_angle - index as f64 * slice_angle - offset
}

/// Smallest non-negative forward travel from `current` to something congruent to `target`
pub fn forward_distance(current: f64, target: f64) -> f64 {
    let distance = (target - current.rem_euclid(360.0)).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if distance >= 360.0 {
        0.0
    } else {
        distance
    }
}

/// Where the pointer falls inside the wheel's own frame, in `[0, 360)`
pub fn pointer_in_wheel_frame(rotation: f64, pointer_angle: f64) -> f64 {
    let angle = (pointer_angle - rotation).rem_euclid(360.0);
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

pub fn slice_under_pointer(rotation: f64, count: usize, pointer_angle: f64) -> Option<usize> {
    let slice = slice_angle(count)?;
    let index = (pointer_in_wheel_frame(rotation, pointer_angle) / slice).floor() as usize;
    Some(index.min(count - 1))
}

/// How far into its slice the pointer is, as a fraction of the slice width
pub fn pointer_slice_fraction(rotation: f64, count: usize, pointer_angle: f64) -> Option<f64> {
    let slice = slice_angle(count)?;
    let angle = pointer_in_wheel_frame(rotation, pointer_angle);
    Some((angle - (angle / slice).floor() * slice) / slice)
}

/// Picks the winner and the rotation the wheel has to end on.
pub fn plan_spin(
    state: &WheelState,
    config: &config::Spin,
    rng: &mut impl Rng,
) -> Result<SpinResult, SpinError> {
    let slice = state.slice_angle().ok_or(SpinError::NoEntries)?;
    let winner_index = rng.gen_range(0..state.entries.len());
    let margin = config.slice_margin.clamp(0.0, 0.5) as f64;
    let offset = slice * (margin + (1.0 - 2.0 * margin) * rng.gen::<f64>());
    let extra_turns = rng
        .gen_range(config.min_extra_turns..=config.max_extra_turns.max(config.min_extra_turns));
    Ok(landing(
        state.rotation_degrees,
        winner_index,
        slice,
        offset,
        extra_turns,
        config.pointer_angle as f64,
    ))
}

/// Deterministic part of [plan_spin]
pub fn landing(
    current_rotation: f64,
    winner_index: usize,
    slice_angle: f64,
    offset: f64,
    extra_turns: u32,
    pointer_angle: f64,
) -> SpinResult {
    let stop = stop_angle(winner_index, slice_angle, offset, pointer_angle);
    let distance = forward_distance(current_rotation, stop);
    SpinResult {
        winner_index,
        final_rotation_degrees: current_rotation + distance + extra_turns as f64 * 360.0,
    }
}
