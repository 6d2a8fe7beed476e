use crate::util::math::difficulty_range;

use super::OsuObjectKind;

const MAXIMUM_ROTATIONS_PER_SECOND: f64 = 477.0 / 60.0;

/// Rotation requirements of a spinner in osu!stable.
///
/// Lazer applies a lenience to spinners so its nested ticks do not match
/// osu!stable's. These values are recomputed the way osu!stable did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpinnerRotations {
    /// The amount of half spins possible for the entire spinner.
    pub total_half_spins_possible: i32,
    /// The amount of half spins required to complete the spinner.
    pub half_spins_required_for_completion: i32,
    /// Completion plus another one and a half rotations.
    pub half_spins_required_before_bonus: i32,
}

impl SpinnerRotations {
    /// Rotation requirements of a spinner with the given duration in
    /// milliseconds and the overall difficulty of the playable beatmap.
    pub fn new(duration: f64, overall_difficulty: f32) -> Self {
        let minimum_rotations_per_second =
            difficulty_range(f64::from(overall_difficulty), 3.0, 5.0, 7.5);

        let seconds_duration = duration / 1000.0;

        let total_half_spins_possible =
            (seconds_duration * MAXIMUM_ROTATIONS_PER_SECOND * 2.0) as i32;
        let half_spins_required_for_completion =
            (seconds_duration * minimum_rotations_per_second) as i32;

        Self {
            total_half_spins_possible,
            half_spins_required_for_completion,
            half_spins_required_before_bonus: half_spins_required_for_completion.saturating_add(3),
        }
    }

    /// The ticks that osu!stable would have awarded for a fully spun spinner.
    pub fn ticks(&self) -> SpinnerTicks {
        SpinnerTicks {
            half_spin: 0,
            total: i64::from(self.total_half_spins_possible),
            before_bonus: i64::from(self.half_spins_required_before_bonus),
        }
    }
}

/// Iterator over the [`SpinnerTick`]s and [`SpinnerBonusTick`]s of a
/// spinner.
///
/// Each even half spin after the first full rotation awards a tick. Once
/// enough half spins for the bonus are reached, every other half spin awards
/// a bonus tick instead.
///
/// [`SpinnerTick`]: OsuObjectKind::SpinnerTick
/// [`SpinnerBonusTick`]: OsuObjectKind::SpinnerBonusTick
#[derive(Clone, Debug)]
pub struct SpinnerTicks {
    half_spin: i64,
    total: i64,
    before_bonus: i64,
}

impl Iterator for SpinnerTicks {
    type Item = OsuObjectKind;

    fn next(&mut self) -> Option<Self::Item> {
        while self.half_spin <= self.total {
            let i = self.half_spin;
            self.half_spin += 1;

            if i > self.before_bonus && (i - self.before_bonus) % 2 == 0 {
                return Some(OsuObjectKind::SpinnerBonusTick);
            } else if i > 1 && i % 2 == 0 {
                return Some(OsuObjectKind::SpinnerTick);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.half_spin + 1).max(0) as usize;

        (0, Some(remaining))
    }
}
