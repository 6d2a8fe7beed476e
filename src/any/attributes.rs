/// The result of a score v1 simulation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegacyScoreAttributes {
    /// Score from judgements without combo bonus.
    pub accuracy_score: i64,
    /// Score from the combo multiplier.
    pub combo_score: i64,
    /// Ratio between lazer's and osu!stable's bonus score.
    ///
    /// Zero if there was no bonus score.
    pub bonus_score_ratio: f64,
    /// osu!stable's bonus score e.g. from spinners or bananas.
    pub bonus_score: i64,
    /// The combo after all objects.
    pub max_combo: u32,
}

impl LegacyScoreAttributes {
    /// osu!stable's score of the simulated full combo.
    pub const fn total_score(&self) -> i64 {
        self.accuracy_score + self.combo_score + self.bonus_score
    }

    /// The bonus score converted to lazer's scale.
    pub fn lazer_bonus_score(&self) -> f64 {
        self.bonus_score as f64 * self.bonus_score_ratio
    }
}
