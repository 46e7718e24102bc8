// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::prelude::*;

pub type RatingValue = u8;

/// A canonical track rating, counted in half stars.
///
/// The value is always within [`Rating::MIN`] and [`Rating::MAX`].
/// An unrated track is represented by `Option::<Rating>::None`, never
/// by [`Rating::MIN`] which denotes a track that has explicitly been
/// rated with no stars.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RatingValue", into = "RatingValue")
)]
pub struct Rating(RatingValue);

impl Rating {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(10);

    pub const HALF_STARS_PER_STAR: RatingValue = 2;

    /// Creates a rating from a canonical value.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub const fn new(value: RatingValue) -> Option<Self> {
        if value > Self::MAX.value() {
            return None;
        }
        Some(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> RatingValue {
        let Self(value) = self;
        value
    }

    #[must_use]
    pub const fn from_half_stars(half_stars: RatingValue) -> Option<Self> {
        Self::new(half_stars)
    }

    /// Saturating conversion from an arbitrary integer.
    #[must_use]
    pub fn clamp_from(value: i64) -> Self {
        let clamped = value.clamp(Self::MIN.value().into(), Self::MAX.value().into());
        Self(clamped as RatingValue)
    }

    /// Rounds a fractional canonical value to the nearest rating.
    ///
    /// Values outside the valid range saturate at the nearest endpoint.
    /// `NaN` is mapped to [`Rating::MIN`].
    #[must_use]
    pub fn from_f64_rounded(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        let clamped = value.round().clamp(
            f64::from(Self::MIN.value()),
            f64::from(Self::MAX.value()),
        );
        Self(clamped as RatingValue)
    }

    /// The rating as a fraction of [`Rating::MAX`], i.e. within 0.0 and 1.0.
    #[must_use]
    pub fn to_fraction(self) -> f64 {
        f64::from(self.value()) / f64::from(Self::MAX.value())
    }

    /// The number of stars, within 0.0 and 5.0.
    #[must_use]
    pub fn stars(self) -> f64 {
        f64::from(self.value()) / f64::from(Self::HALF_STARS_PER_STAR)
    }

    /// All valid ratings in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator + Clone {
        (Self::MIN.value()..=Self::MAX.value()).map(Self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RatingInvalidity {
    OutOfRange(RatingValue),
}

impl fmt::Display for RatingInvalidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(
                f,
                "rating {value} out of range [{min}, {max}]",
                min = Rating::MIN.value(),
                max = Rating::MAX.value()
            ),
        }
    }
}

impl std::error::Error for RatingInvalidity {}

impl Validate for Rating {
    type Invalidity = RatingInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                !(*self >= Self::MIN && *self <= Self::MAX),
                Self::Invalidity::OutOfRange(self.value()),
            )
            .into()
    }
}

impl TryFrom<RatingValue> for Rating {
    type Error = RatingInvalidity;

    fn try_from(value: RatingValue) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RatingInvalidity::OutOfRange(value))
    }
}

impl From<Rating> for RatingValue {
    fn from(from: Rating) -> Self {
        from.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{value}/{max}",
            value = self.value(),
            max = Self::MAX.value()
        )
    }
}
