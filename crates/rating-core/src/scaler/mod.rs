// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use crate::{prelude::*, rating::RatingValue};

pub mod player;

/// Number of canonical rating steps, i.e. one native codepoint per step.
pub const STAR_TABLE_LEN: usize = Rating::MAX.value() as usize + 1;

/// Byte codepoints of a star table, indexed by the canonical rating.
pub type StarTableCodepoints = [u8; STAR_TABLE_LEN];

/// Maps a native rating domain onto canonical ratings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Calibration {
    /// A dense, linear domain from 0 to `max`.
    Linear { max: u16 },

    /// Sparse byte codepoints, one per canonical rating.
    ///
    /// The codepoints must be strictly increasing. Native values in
    /// between two codepoints decode to the nearest one, ties resolve
    /// towards the higher rating.
    StarTable(&'static StarTableCodepoints),
}

impl Calibration {
    #[must_use]
    pub fn decode(&self, native: f64) -> Rating {
        if native.is_nan() {
            return Rating::MIN;
        }
        match self {
            Self::Linear { max } => {
                debug_assert!(*max > 0);
                Rating::from_f64_rounded(
                    native * f64::from(Rating::MAX.value()) / f64::from(*max),
                )
            }
            Self::StarTable(codepoints) => {
                let native = native
                    .max(f64::from(codepoints[0]))
                    .min(f64::from(codepoints[STAR_TABLE_LEN - 1]));
                let mut nearest = Rating::MIN;
                let mut nearest_distance = f64::INFINITY;
                for (rating, codepoint) in Rating::all().zip(codepoints.iter()) {
                    let distance = (native - f64::from(*codepoint)).abs();
                    // Equal distances prefer the higher rating
                    if distance <= nearest_distance {
                        nearest = rating;
                        nearest_distance = distance;
                    }
                }
                nearest
            }
        }
    }

    #[must_use]
    pub fn encode(&self, rating: Rating) -> f64 {
        match self {
            Self::Linear { max } => {
                f64::from(rating.value()) * f64::from(*max) / f64::from(Rating::MAX.value())
            }
            Self::StarTable(codepoints) => f64::from(codepoints[usize::from(rating.value())]),
        }
    }

    /// The largest native value of this domain.
    #[must_use]
    pub fn native_max(&self) -> f64 {
        match self {
            Self::Linear { max } => f64::from(*max),
            Self::StarTable(codepoints) => f64::from(codepoints[STAR_TABLE_LEN - 1]),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CalibrationInvalidity {
    ZeroLinearMax,
    StarTableNotStrictlyIncreasing { rating: RatingValue },
}

impl Validate for Calibration {
    type Invalidity = CalibrationInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let mut context = ValidationContext::new();
        match self {
            Self::Linear { max } => {
                context = context.invalidate_if(*max == 0, Self::Invalidity::ZeroLinearMax);
            }
            Self::StarTable(codepoints) => {
                for (rating, pair) in Rating::all().skip(1).zip(codepoints.windows(2)) {
                    context = context.invalidate_if(
                        pair[0] >= pair[1],
                        Self::Invalidity::StarTableNotStrictlyIncreasing {
                            rating: rating.value(),
                        },
                    );
                }
            }
        }
        context.into()
    }
}

/// Codec for the ratings written by a single player.
///
/// The key identifies the entries written by this player if a tag
/// may contain multiple, coexisting ratings, e.g. the email field of
/// ID3v2 POPM frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scaler {
    key: Cow<'static, str>,
    calibration: Calibration,
}

impl Scaler {
    #[must_use]
    pub const fn new_static(key: &'static str, calibration: Calibration) -> Self {
        Self {
            key: Cow::Borrowed(key),
            calibration,
        }
    }

    #[must_use]
    pub fn new(key: impl Into<Cow<'static, str>>, calibration: Calibration) -> Self {
        Self {
            key: key.into(),
            calibration,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Returns the own key if it is among the present keys.
    pub fn identify<'k>(&self, mut present_keys: impl Iterator<Item = &'k str>) -> Option<&str> {
        present_keys
            .any(|key| key == self.key())
            .then(|| self.key())
    }

    #[must_use]
    pub fn decode(&self, native: f64) -> Rating {
        self.calibration.decode(native)
    }

    #[must_use]
    pub fn encode(&self, rating: Rating) -> f64 {
        self.calibration.encode(rating)
    }

    /// Encodes the rating for byte-sized slots.
    ///
    /// The native value is rounded and saturated to the byte range.
    #[must_use]
    pub fn encode_byte(&self, rating: Rating) -> u8 {
        let native = self.encode(rating).round();
        native.clamp(0.0, f64::from(u8::MAX)) as u8
    }
}
