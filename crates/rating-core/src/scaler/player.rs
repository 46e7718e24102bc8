// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Rating scales of popular media players.
//!
//! Most players store their ratings in ID3v2 POPM frames and identify
//! their own frame by the email field. There is no standard for mapping
//! stars onto the rating byte. The tables below follow what the players
//! actually write for whole stars. Half stars that a player cannot
//! represent occupy the codepoints in between.

use std::borrow::Cow;

use super::{Calibration, Scaler, StarTableCodepoints};

/// Default key of the application's own POPM entry.
pub const DEFAULT_OWN_KEY: &str = "rating@aoide.org";

pub const WINDOWS_MEDIA_PLAYER_KEY: &str = "Windows Media Player 9 Series";
pub const MEDIA_MONKEY_KEY: &str = "no@email";
pub const BANSHEE_KEY: &str = "Banshee";
pub const QUOD_LIBET_KEY: &str = "quodlibet@lists.sacredchao.net";
pub const WINAMP_KEY: &str = "rating@winamp.com";
pub const MUSICBEE_KEY: &str = "MusicBee";

/// Whole stars as written by WMP, Winamp and Banshee: 1 = 1 star,
/// 64 = 2 stars, 128 = 3 stars, 196 = 4 stars, 255 = 5 stars.
///
/// Half stars need codepoints of their own and only 0 lies below the
/// 1 star codepoint. Codepoint 1 therefore decodes as half a star and
/// a single star is written as 23, which these players still display
/// as 1 star. A single star written by one of these players reads back
/// as half a star.
pub const WHOLE_STAR_CODEPOINTS: StarTableCodepoints =
    [0, 1, 23, 45, 64, 96, 128, 160, 196, 224, 255];

/// Half stars as written by players that support them.
///
/// These players write 13 for a half star and 1 for a single star, which
/// is not monotonic. The table keeps both codepoints in ascending order,
/// i.e. 1 decodes as half a star and 13 as a single star.
pub const HALF_STAR_CODEPOINTS: StarTableCodepoints =
    [0, 1, 13, 54, 64, 118, 128, 186, 196, 242, 255];

pub const LINEAR_BYTE: Calibration = Calibration::Linear { max: 255 };

pub const LINEAR_PERCENT: Calibration = Calibration::Linear { max: 100 };

pub const WHOLE_STARS: Calibration = Calibration::StarTable(&WHOLE_STAR_CODEPOINTS);

pub const HALF_STARS: Calibration = Calibration::StarTable(&HALF_STAR_CODEPOINTS);

pub const WINDOWS_MEDIA_PLAYER: Scaler = Scaler::new_static(WINDOWS_MEDIA_PLAYER_KEY, WHOLE_STARS);

pub const MEDIA_MONKEY: Scaler = Scaler::new_static(MEDIA_MONKEY_KEY, HALF_STARS);

pub const BANSHEE: Scaler = Scaler::new_static(BANSHEE_KEY, WHOLE_STARS);

pub const QUOD_LIBET: Scaler = Scaler::new_static(QUOD_LIBET_KEY, LINEAR_BYTE);

pub const WINAMP: Scaler = Scaler::new_static(WINAMP_KEY, WHOLE_STARS);

pub const MUSICBEE: Scaler = Scaler::new_static(MUSICBEE_KEY, HALF_STARS);

/// All known third-party scalers in their default priority order.
pub static KNOWN_EXTERNAL_SCALERS: [Scaler; 6] = [
    WINDOWS_MEDIA_PLAYER,
    MEDIA_MONKEY,
    BANSHEE,
    QUOD_LIBET,
    WINAMP,
    MUSICBEE,
];

#[must_use]
pub fn known_external_scaler(key: &str) -> Option<&'static Scaler> {
    KNOWN_EXTERNAL_SCALERS
        .iter()
        .find(|scaler| scaler.key() == key)
}

/// The scaler for the application's own entry.
///
/// Uses the full byte range linearly.
#[must_use]
pub fn own_scaler(key: impl Into<Cow<'static, str>>) -> Scaler {
    Scaler::new(key, LINEAR_BYTE)
}

#[must_use]
pub fn default_own_scaler() -> Scaler {
    own_scaler(DEFAULT_OWN_KEY)
}
