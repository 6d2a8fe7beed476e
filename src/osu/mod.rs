use rosu_map::section::general::GameMode;
use tracing::trace;

use crate::any::{
    BonusResult, BonusScoreValues, HitObject, LegacyObjectKind, LegacyScoreSimulator, ScoreEntry,
    ScoreSimulation,
};

pub use self::spinner::{SpinnerRotations, SpinnerTicks};

mod spinner;

/// Score v1 simulator for osu!standard.
///
/// # Example
///
/// ```
/// use rosu_legacy_score::{
///     osu::{OsuHitObject, OsuLegacyScoreSimulator},
///     BeatmapDifficulty,
/// };
///
/// let objects = vec![OsuHitObject::circle(), OsuHitObject::circle()];
///
/// let attrs = OsuLegacyScoreSimulator::new()
///     .mods(8_u32) // HD
///     .simulate(&objects, BeatmapDifficulty::new(5.0, 5.0, 5.0), &objects);
///
/// assert_eq!(attrs.accuracy_score, 600);
/// ```
pub type OsuLegacyScoreSimulator<B = crate::any::LazerBonusValues> =
    LegacyScoreSimulator<OsuObjectKind, B>;

/// An osu!standard object of a playable beatmap.
pub type OsuHitObject = HitObject<OsuObjectKind>;

/// Kinds of osu!standard objects.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OsuObjectKind {
    Circle,
    Slider,
    SliderHead,
    SliderTick,
    SliderRepeat,
    SliderTail,
    /// Duration in milliseconds.
    Spinner {
        duration: f64,
    },
    SpinnerTick,
    SpinnerBonusTick,
}

impl LegacyObjectKind for OsuObjectKind {
    const MODE: GameMode = GameMode::Osu;

    fn accepts_mode(mode: GameMode) -> bool {
        mode == GameMode::Osu
    }

    fn score_entry(self) -> Option<ScoreEntry> {
        let entry = match self {
            Self::Circle => ScoreEntry::new(300, true, true, None),
            Self::Slider => ScoreEntry::new(300, false, true, None),
            Self::SliderHead | Self::SliderRepeat | Self::SliderTail => {
                ScoreEntry::new(30, true, false, None)
            }
            Self::SliderTick => ScoreEntry::new(10, true, false, None),
            Self::Spinner { .. } => ScoreEntry::new(300, true, true, None),
            Self::SpinnerTick => ScoreEntry::new(100, false, false, Some(BonusResult::Small)),
            Self::SpinnerBonusTick => ScoreEntry::new(1100, false, false, Some(BonusResult::Large)),
        };

        Some(entry)
    }

    fn has_path(self) -> bool {
        matches!(self, Self::Slider)
    }

    fn duration(self) -> Option<f64> {
        match self {
            Self::Spinner { duration } => Some(duration),
            _ => None,
        }
    }

    fn simulate_nested<B>(h: &OsuHitObject, sim: &mut ScoreSimulation<'_, B>)
    where
        B: BonusScoreValues + ?Sized,
    {
        let Self::Spinner { duration } = h.kind else {
            for nested in h.nested.iter() {
                sim.simulate_hit(nested);
            }

            return;
        };

        // Spinner ticks are derived from osu!stable's rotation requirements
        // instead of the nested objects.
        let rotations = SpinnerRotations::new(duration, sim.overall_difficulty());

        trace!(
            duration,
            total_half_spins = rotations.total_half_spins_possible,
            required_half_spins = rotations.half_spins_required_for_completion,
            "Reconstructed spinner rotations"
        );

        for tick in rotations.ticks() {
            sim.simulate_kind(tick);
        }
    }
}

impl OsuHitObject {
    pub const fn circle() -> Self {
        Self::new(OsuObjectKind::Circle)
    }

    /// A slider whose nested objects are its head, ticks, repeats, and tail.
    pub const fn slider(nested: Vec<Self>) -> Self {
        Self::with_nested(OsuObjectKind::Slider, nested)
    }

    pub const fn slider_head() -> Self {
        Self::new(OsuObjectKind::SliderHead)
    }

    pub const fn slider_tick() -> Self {
        Self::new(OsuObjectKind::SliderTick)
    }

    pub const fn slider_repeat() -> Self {
        Self::new(OsuObjectKind::SliderRepeat)
    }

    pub const fn slider_tail() -> Self {
        Self::new(OsuObjectKind::SliderTail)
    }

    /// A spinner with the given duration in milliseconds.
    pub const fn spinner(duration: f64) -> Self {
        Self::new(OsuObjectKind::Spinner { duration })
    }
}
