use rosu_map::section::general::GameMode;
use thiserror::Error;

/// Error when simulating the legacy score of a [`Beatmap`].
///
/// [`Beatmap`]: rosu_pp::Beatmap
#[derive(Debug, Error)]
pub enum LegacyScoreError {
    #[error("cannot simulate the legacy score of a {actual:?} map as {expected:?}")]
    IncompatibleMode { expected: GameMode, actual: GameMode },
}
