use rosu_legacy_score::{
    catch::{CatchHitObject, CatchLegacyScoreSimulator},
    osu::{OsuHitObject, OsuLegacyScoreSimulator},
    BeatmapDifficulty, LegacyScoreError, ObjectCounts,
};
use rosu_map::section::general::GameMode;
use rosu_pp::Beatmap;

use self::common::*;

mod common;

fn playable() -> Vec<OsuHitObject> {
    vec![
        OsuHitObject::circle(),
        OsuHitObject::circle(),
        OsuHitObject::slider(vec![OsuHitObject::slider_head(), OsuHitObject::slider_tail()]),
        OsuHitObject::spinner(2000.0),
    ]
}

#[test]
fn difficulty_and_counts() {
    let map = Beatmap::from_path(OSU).unwrap();

    assert_eq!(map.mode, GameMode::Osu);
    assert_eq!(
        BeatmapDifficulty::from(&map),
        BeatmapDifficulty::new(5.0, 8.0, 4.0)
    );
    assert_eq!(
        ObjectCounts::new(&map.hit_objects),
        ObjectCounts {
            normal: 2,
            sliders: 1,
            spinners: 1,
        }
    );
}

#[test]
fn simulate_osu_map() {
    let map = Beatmap::from_path(OSU).unwrap();
    let playable = playable();

    let attrs = OsuLegacyScoreSimulator::new()
        .simulate_map(&map, &playable)
        .unwrap();

    // (5 + 8 + 4 + 6.4) / 38 * 5 = 3.08
    assert_eq!(attrs.accuracy_score, 2 * 300 + 2 * 30 + 300 + 300);
    assert_eq!(attrs.combo_score, 3 * 36 + 3 * 36);
    assert_eq!(attrs.max_combo, 5);

    // OD 8 requires 13 half spins, leaving 8 ticks and 7 bonus ticks
    assert_eq!(attrs.bonus_score, 8 * 100 + 7 * 1100);
    assert_eq_float(attrs.bonus_score_ratio, 430.0 / 8500.0);
}

#[test]
fn simulate_map_matches_simulate() {
    let map = Beatmap::from_path(OSU).unwrap();
    let playable = playable();
    let simulator = OsuLegacyScoreSimulator::new().mods(mods::HD | mods::FL);

    let from_map = simulator.simulate_map(&map, &playable).unwrap();
    let from_objects = simulator.simulate(&playable, BeatmapDifficulty::from(&map), &playable);

    assert_eq!(from_map, from_objects);
}

#[test]
fn incompatible_mode() {
    let mut map = Beatmap::from_path(OSU).unwrap();
    map.mode = GameMode::Mania;

    let err = OsuLegacyScoreSimulator::new()
        .simulate_map(&map, &playable())
        .unwrap_err();

    assert!(matches!(
        err,
        LegacyScoreError::IncompatibleMode {
            expected: GameMode::Osu,
            actual: GameMode::Mania,
        }
    ));

    let res = CatchLegacyScoreSimulator::new().simulate_map(&map, &[CatchHitObject::fruit()]);

    assert!(res.is_err());
}

#[test]
fn catch_accepts_converts() {
    let map = Beatmap::from_path(OSU).unwrap();

    let playable = vec![
        CatchHitObject::fruit(),
        CatchHitObject::fruit(),
        juice_stream(0, 0),
        CatchHitObject::banana_shower(2000.0, vec![CatchHitObject::banana(); 4]),
    ];

    let attrs = CatchLegacyScoreSimulator::new()
        .simulate_map(&map, &playable)
        .unwrap();

    assert_eq!(attrs.accuracy_score, 4 * 300);
    assert_eq!(attrs.max_combo, 4);
    assert_eq!(attrs.bonus_score, 4 * 1100);
}
