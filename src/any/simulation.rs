use tracing::warn;

use super::{
    attributes::LegacyScoreAttributes,
    bonus::BonusScoreValues,
    object::{HitObject, LegacyObjectKind, ScoreEntry},
};

/// Objects nested deeper than this are not simulated.
const MAX_NESTING_DEPTH: usize = 32;

#[derive(Clone, Debug, Default)]
struct SimulationState {
    accuracy_score: i64,
    combo_score: i64,
    legacy_bonus_score: i64,
    modern_bonus_score: i64,
    combo: u32,
}

/// A single run of the score v1 simulation.
///
/// Accumulates the score of every simulated object under the assumption that
/// all of them are hit.
pub struct ScoreSimulation<'a, B: ?Sized> {
    state: SimulationState,
    score_multiplier: f64,
    overall_difficulty: f32,
    bonus_values: &'a B,
    depth: usize,
}

impl<'a, B: BonusScoreValues + ?Sized> ScoreSimulation<'a, B> {
    pub(crate) fn new(score_multiplier: f64, overall_difficulty: f32, bonus_values: &'a B) -> Self {
        Self {
            state: SimulationState::default(),
            score_multiplier,
            overall_difficulty,
            bonus_values,
            depth: 0,
        }
    }

    /// Overall difficulty of the playable beatmap.
    pub const fn overall_difficulty(&self) -> f32 {
        self.overall_difficulty
    }

    /// Simulate an object after everything that is judged before it.
    pub fn simulate_hit<K: LegacyObjectKind>(&mut self, h: &HitObject<K>) {
        if self.depth >= MAX_NESTING_DEPTH {
            warn!(kind = ?h.kind, depth = self.depth, "Skipping object nested too deeply");

            return;
        }

        self.depth += 1;
        K::simulate_nested(h, self);
        self.depth -= 1;

        self.apply(h.kind.score_entry());
    }

    /// Simulate an object that only exists for the simulation and has no
    /// nested objects.
    pub fn simulate_kind<K: LegacyObjectKind>(&mut self, kind: K) {
        self.apply(kind.score_entry());
    }

    fn apply(&mut self, entry: Option<ScoreEntry>) {
        let Some(ScoreEntry {
            score,
            increase_combo,
            combo_multiplier,
            bonus,
        }) = entry
        else {
            return;
        };

        let state = &mut self.state;

        if combo_multiplier {
            // `score / 25` is truncated before the multiplier is applied
            let combo = f64::from(state.combo.saturating_sub(1));
            let value = f64::from(score / 25) * self.score_multiplier;
            state.combo_score += (combo * value) as i64;
        }

        match bonus {
            Some(result) => {
                state.legacy_bonus_score += i64::from(score);
                state.modern_bonus_score += i64::from(self.bonus_values.numeric_value(result));
            }
            None => state.accuracy_score += i64::from(score),
        }

        if increase_combo {
            state.combo += 1;
        }
    }

    pub(crate) fn finish(self) -> LegacyScoreAttributes {
        let SimulationState {
            accuracy_score,
            combo_score,
            legacy_bonus_score,
            modern_bonus_score,
            combo,
        } = self.state;

        let bonus_score_ratio = if legacy_bonus_score == 0 {
            0.0
        } else {
            modern_bonus_score as f64 / legacy_bonus_score as f64
        };

        LegacyScoreAttributes {
            accuracy_score,
            combo_score,
            bonus_score_ratio,
            bonus_score: legacy_bonus_score,
            max_combo: combo,
        }
    }
}
