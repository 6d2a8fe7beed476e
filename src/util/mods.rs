use rosu_map::section::general::GameMode;
use rosu_mods::{GameModIntermode, GameMods as GameModsLazer, GameModsIntermode, GameModsLegacy};

/// Legacy mod queries required for score v1.
///
/// Implemented for
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
/// - [`rosu_mods::GameModsIntermode`]
/// - [`rosu_mods::GameMods`]
///
/// See <https://github.com/ppy/osu-api/wiki#mods>
pub trait Mods {
    fn nf(&self) -> bool;
    fn ez(&self) -> bool;
    fn hd(&self) -> bool;
    fn hr(&self) -> bool;
    /// DoubleTime or Nightcore
    fn dt(&self) -> bool;
    /// HalfTime or Daycore
    fn ht(&self) -> bool;
    fn fl(&self) -> bool;
    fn so(&self) -> bool;
    fn rx(&self) -> bool;
    fn ap(&self) -> bool;
    fn v2(&self) -> bool;

    /// The product of all mod multipliers as osu!stable applied them for the
    /// given mode.
    ///
    /// Modes other than osu!catch use the osu!standard table.
    fn legacy_score_multiplier(&self, mode: GameMode) -> f64 {
        if self.rx() || self.ap() {
            return 0.0;
        }

        let v2 = self.v2();
        let mut multiplier = 1.0;

        if self.nf() && !v2 {
            multiplier *= 0.5;
        }

        if self.ez() {
            multiplier *= 0.5;
        }

        if self.ht() {
            multiplier *= 0.3;
        }

        if self.hd() {
            multiplier *= 1.06;
        }

        if let GameMode::Catch = mode {
            if self.hr() {
                multiplier *= 1.12;
            }

            if self.dt() {
                multiplier *= 1.06;
            }
        } else {
            if self.hr() {
                multiplier *= if v2 { 1.1 } else { 1.06 };
            }

            if self.dt() {
                multiplier *= if v2 { 1.2 } else { 1.12 };
            }

            if self.so() {
                multiplier *= 0.9;
            }
        }

        if self.fl() {
            multiplier *= 1.12;
        }

        multiplier
    }
}

macro_rules! impl_mods_fn {
    ( $fn_name:ident, $bits:expr ) => {
        fn $fn_name(&self) -> bool {
            *self & ($bits) != 0
        }
    };
}

macro_rules! impl_ref_fn {
    ( $( $fn_name:ident ),* ) => {
        $(
            fn $fn_name(&self) -> bool {
                (**self).$fn_name()
            }
        )*
    };
}

impl Mods for u32 {
    impl_mods_fn!(nf, 1 << 0);
    impl_mods_fn!(ez, 1 << 1);
    impl_mods_fn!(hd, 1 << 3);
    impl_mods_fn!(hr, 1 << 4);
    impl_mods_fn!(dt, (1 << 6) | (1 << 9));
    impl_mods_fn!(rx, 1 << 7);
    impl_mods_fn!(ht, 1 << 8);
    impl_mods_fn!(fl, 1 << 10);
    impl_mods_fn!(so, 1 << 12);
    impl_mods_fn!(ap, 1 << 13);
    impl_mods_fn!(v2, 1 << 29);
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: [ $( $legacy:ident )|* ] [ $( $intermode:ident )|+ ], )* ) => {
        impl Mods for GameModsLegacy {
            $(
                fn $fn(&self) -> bool {
                    false $( || self.contains(GameModsLegacy::$legacy) )*
                }
            )*
        }

        impl Mods for GameModsIntermode {
            $(
                fn $fn(&self) -> bool {
                    $( self.contains(GameModIntermode::$intermode) )||+
                }
            )*
        }

        impl Mods for GameModsLazer {
            $(
                fn $fn(&self) -> bool {
                    $( self.contains_intermode(GameModIntermode::$intermode) )||+
                }
            )*
        }
    };
}

impl_has_mod! {
    nf: [NoFail] [NoFail],
    ez: [Easy] [Easy],
    hd: [Hidden] [Hidden],
    hr: [HardRock] [HardRock],
    dt: [DoubleTime | Nightcore] [DoubleTime | Nightcore],
    ht: [HalfTime] [HalfTime | Daycore],
    fl: [Flashlight] [Flashlight],
    so: [SpunOut] [SpunOut],
    rx: [Relax] [Relax],
    ap: [Autopilot] [Autopilot],
    v2: [ScoreV2] [ScoreV2],
}

impl<M: Mods + ?Sized> Mods for &M {
    impl_ref_fn!(nf, ez, hd, hr, dt, ht, fl, so, rx, ap, v2);
}
