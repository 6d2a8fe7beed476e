use std::marker::PhantomData;

use rosu_pp::Beatmap;
use tracing::debug;

use crate::{error::LegacyScoreError, util::mods::Mods};

use super::{
    attributes::LegacyScoreAttributes,
    bonus::{BonusScoreValues, LazerBonusValues},
    object::{HitObject, LegacyObjectKind, ObjectShape},
    rating::{legacy_score_multiplier, BeatmapDifficulty, ObjectCounts, ScoreMultiplier},
    simulation::ScoreSimulation,
};

/// Score v1 simulator for the mode of `K`.
///
/// See [`OsuLegacyScoreSimulator`] and [`CatchLegacyScoreSimulator`].
///
/// [`OsuLegacyScoreSimulator`]: crate::osu::OsuLegacyScoreSimulator
/// [`CatchLegacyScoreSimulator`]: crate::catch::CatchLegacyScoreSimulator
#[derive(Clone, Debug)]
#[must_use]
pub struct LegacyScoreSimulator<K, B = LazerBonusValues> {
    mod_multiplier: f64,
    od_adjustment: OdAdjustment,
    playable_difficulty: Option<BeatmapDifficulty>,
    bonus_values: B,
    _mode: PhantomData<K>,
}

impl<K: LegacyObjectKind> LegacyScoreSimulator<K> {
    /// Create a new simulator without mods.
    pub const fn new() -> Self {
        Self {
            mod_multiplier: 1.0,
            od_adjustment: OdAdjustment::None,
            playable_difficulty: None,
            bonus_values: LazerBonusValues,
            _mode: PhantomData,
        }
    }
}

impl<K: LegacyObjectKind> Default for LegacyScoreSimulator<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: LegacyObjectKind, B: BonusScoreValues> LegacyScoreSimulator<K, B> {
    /// Specify mods.
    ///
    /// The mod multiplier is taken from osu!stable's multipliers of the
    /// simulator's mode. HardRock and Easy also adjust the overall difficulty
    /// of the playable beatmap unless [`playable_difficulty`] is specified.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - references to any of the above
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    ///
    /// [`playable_difficulty`]: LegacyScoreSimulator::playable_difficulty
    pub fn mods<M: Mods>(self, mods: M) -> Self {
        Self {
            mod_multiplier: mods.legacy_score_multiplier(K::MODE),
            od_adjustment: OdAdjustment::new(&mods),
            ..self
        }
    }

    /// Specify the score multipliers of all active modifiers.
    ///
    /// Overrides the multiplier of previously specified [`mods`].
    ///
    /// [`mods`]: LegacyScoreSimulator::mods
    pub fn modifiers<M: ScoreMultiplier>(mut self, modifiers: &[M]) -> Self {
        self.mod_multiplier = modifiers.score_multiplier();

        self
    }

    /// Specify the difficulty of the playable beatmap.
    ///
    /// Only its overall difficulty is used for spinners. If none is
    /// specified, the base difficulty adjusted by the mods is used.
    pub const fn playable_difficulty(mut self, difficulty: BeatmapDifficulty) -> Self {
        self.playable_difficulty = Some(difficulty);

        self
    }

    /// Specify lazer's numeric values of bonus judgements.
    ///
    /// Defaults to [`LazerBonusValues`].
    pub fn bonus_values<C: BonusScoreValues>(self, bonus_values: C) -> LegacyScoreSimulator<K, C> {
        LegacyScoreSimulator {
            mod_multiplier: self.mod_multiplier,
            od_adjustment: self.od_adjustment,
            playable_difficulty: self.playable_difficulty,
            bonus_values,
            _mode: PhantomData,
        }
    }

    /// Simulate a full combo on the given objects.
    ///
    /// `base` are the beatmap's objects as they were placed, only used to
    /// derive the combo score multiplier. `playable` are the objects with all
    /// their nested objects in the order in which they are judged.
    pub fn simulate<O: ObjectShape>(
        &self,
        base: &[O],
        difficulty: BeatmapDifficulty,
        playable: &[HitObject<K>],
    ) -> LegacyScoreAttributes {
        let counts = ObjectCounts::new(base);
        let score_multiplier = legacy_score_multiplier(&difficulty, &counts, self.mod_multiplier);

        let overall_difficulty = self
            .playable_difficulty
            .map_or_else(|| self.od_adjustment.apply(difficulty.od), |d| d.od);

        let mut sim = ScoreSimulation::new(score_multiplier, overall_difficulty, &self.bonus_values);

        for h in playable {
            sim.simulate_hit(h);
        }

        let attrs = sim.finish();

        debug!(
            mode = ?K::MODE,
            score_multiplier,
            accuracy_score = attrs.accuracy_score,
            combo_score = attrs.combo_score,
            bonus_score = attrs.bonus_score,
            bonus_score_ratio = attrs.bonus_score_ratio,
            "Simulated legacy score"
        );

        attrs
    }

    /// Simulate a full combo on the given objects while taking the base
    /// objects and difficulty from the [`Beatmap`].
    pub fn simulate_map(
        &self,
        map: &Beatmap,
        playable: &[HitObject<K>],
    ) -> Result<LegacyScoreAttributes, LegacyScoreError> {
        if !K::accepts_mode(map.mode) {
            return Err(LegacyScoreError::IncompatibleMode {
                expected: K::MODE,
                actual: map.mode,
            });
        }

        Ok(self.simulate(&map.hit_objects, BeatmapDifficulty::from(map), playable))
    }
}

/// Mod that changes the overall difficulty of the playable beatmap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum OdAdjustment {
    None,
    HardRock,
    Easy,
}

impl OdAdjustment {
    fn new<M: Mods>(mods: &M) -> Self {
        if mods.hr() {
            Self::HardRock
        } else if mods.ez() {
            Self::Easy
        } else {
            Self::None
        }
    }

    fn apply(self, od: f32) -> f32 {
        match self {
            Self::None => od,
            Self::HardRock => (od * 1.4).min(10.0),
            Self::Easy => od * 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::osu::OsuLegacyScoreSimulator;

    use super::*;

    const HARD_ROCK: u32 = 1 << 4;

    #[test]
    fn od_adjustment() {
        assert_eq!(OdAdjustment::new(&HARD_ROCK), OdAdjustment::HardRock);
        assert_eq!(OdAdjustment::new(&(1_u32 << 1)), OdAdjustment::Easy);
        assert_eq!(OdAdjustment::new(&0_u32), OdAdjustment::None);

        assert!((OdAdjustment::HardRock.apply(5.0) - 7.0).abs() < f32::EPSILON);
        assert!((OdAdjustment::HardRock.apply(9.0) - 10.0).abs() < f32::EPSILON);
        assert!((OdAdjustment::Easy.apply(8.0) - 4.0).abs() < f32::EPSILON);
        assert!((OdAdjustment::None.apply(8.0) - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn mods_by_value_and_reference() {
        let by_value = OsuLegacyScoreSimulator::new().mods(HARD_ROCK);
        let by_ref = OsuLegacyScoreSimulator::new().mods(&HARD_ROCK);

        assert_eq!(by_value.od_adjustment, OdAdjustment::HardRock);
        assert_eq!(by_ref.od_adjustment, OdAdjustment::HardRock);
        assert!((by_value.mod_multiplier - by_ref.mod_multiplier).abs() < f64::EPSILON);
    }
}
