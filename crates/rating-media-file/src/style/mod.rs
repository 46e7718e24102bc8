// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Storage styles, one per tag convention.
//!
//! A storage style translates between the raw entries of a single slot
//! and a canonical [`Rating`]. Each built-in style declares the tag
//! families it is stored in and guards itself against all other
//! containers, i.e. reading returns `None` and writing leaves the
//! container untouched.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Rating, Result,
    container::{RawValue, TagContainer, TagFamily},
};

mod fractional;
pub use self::fractional::FractionalStyle;

mod player_slot;
pub use self::player_slot::PlayerSlotStyle;

mod popularimeter;
pub use self::popularimeter::{PopularimeterMode, PopularimeterStyle};

mod suffixed;
pub use self::suffixed::{DEFAULT_RATING_SUFFIXES, SuffixedStyle};

/// ID3v2 popularimeter frames, keyed by email.
pub const POPULARIMETER_SLOT: &str = "POPM";

/// A single fraction between 0.0 and 1.0, e.g. written by Amarok.
pub const FMPS_RATING_SLOT: &str = "FMPS_RATING";

/// Text fields `RATING:<suffix>`, one per player.
pub const RATING_SLOT: &str = "RATING";

/// The shared user rating of Windows Media (ASF) files.
pub const WM_SHARED_USER_RATING_SLOT: &str = "WM/SharedUserRating";

/// Controls which entries are written when storing a rating.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WritePolicy {
    /// Only overwrite entries that already exist.
    ///
    /// Never introduces a new key, i.e. no rating is attributed to a
    /// player that did not write it.
    RefreshExisting,

    /// (Re-)create all entries, regardless of whether they exist.
    RecreateAll,
}

impl WritePolicy {
    #[must_use]
    pub const fn permits_write(self, entry_exists: bool) -> bool {
        match self {
            Self::RefreshExisting => entry_exists,
            Self::RecreateAll => true,
        }
    }
}

/// Reads and writes ratings of a single tag convention.
///
/// Lists of ratings are not supported by default.
pub trait RatingStyle: fmt::Debug + Send + Sync {
    /// Reads the rating, `None` if not present or not applicable.
    fn get(&self, container: &dyn TagContainer) -> Result<Option<Rating>>;

    /// Writes the rating. Writing `None` does nothing.
    fn set(&self, container: &mut dyn TagContainer, rating: Option<Rating>) -> Result<()>;

    fn get_list(&self, _container: &dyn TagContainer) -> Result<Vec<Rating>> {
        Err(Error::UnsupportedOperation("reading a list of ratings"))
    }

    fn set_list(&self, _container: &mut dyn TagContainer, _ratings: &[Rating]) -> Result<()> {
        Err(Error::UnsupportedOperation("writing a list of ratings"))
    }
}

/// All supported tag conventions.
#[derive(Debug, Clone)]
pub enum StorageStyle {
    Popularimeter(PopularimeterStyle),
    Fractional(FractionalStyle),
    Suffixed(SuffixedStyle),
    PlayerSlot(PlayerSlotStyle),

    /// A convention that is provided by the host application.
    Custom(Arc<dyn RatingStyle>),
}

impl StorageStyle {
    fn as_rating_style(&self) -> &dyn RatingStyle {
        match self {
            Self::Popularimeter(style) => style,
            Self::Fractional(style) => style,
            Self::Suffixed(style) => style,
            Self::PlayerSlot(style) => style,
            Self::Custom(style) => style.as_ref(),
        }
    }
}

impl RatingStyle for StorageStyle {
    fn get(&self, container: &dyn TagContainer) -> Result<Option<Rating>> {
        self.as_rating_style().get(container)
    }

    fn set(&self, container: &mut dyn TagContainer, rating: Option<Rating>) -> Result<()> {
        self.as_rating_style().set(container, rating)
    }

    fn get_list(&self, container: &dyn TagContainer) -> Result<Vec<Rating>> {
        self.as_rating_style().get_list(container)
    }

    fn set_list(&self, container: &mut dyn TagContainer, ratings: &[Rating]) -> Result<()> {
        self.as_rating_style().set_list(container, ratings)
    }
}

impl From<PopularimeterStyle> for StorageStyle {
    fn from(from: PopularimeterStyle) -> Self {
        Self::Popularimeter(from)
    }
}

impl From<FractionalStyle> for StorageStyle {
    fn from(from: FractionalStyle) -> Self {
        Self::Fractional(from)
    }
}

impl From<SuffixedStyle> for StorageStyle {
    fn from(from: SuffixedStyle) -> Self {
        Self::Suffixed(from)
    }
}

impl From<PlayerSlotStyle> for StorageStyle {
    fn from(from: PlayerSlotStyle) -> Self {
        Self::PlayerSlot(from)
    }
}

/// Checks if the container's tag family is one of the given families.
fn is_applicable(slot: &str, tag_families: &[TagFamily], container: &dyn TagContainer) -> bool {
    let tag_family = container.tag_family();
    if tag_families.contains(&tag_family) {
        return true;
    }
    log::trace!("{slot} ratings are not stored in {tag_family:?} tags");
    false
}

/// Interprets a raw entry as a number.
///
/// Unparsable entries are treated as missing.
fn native_value(slot: &str, key: &str, value: &RawValue) -> Option<f64> {
    let native = value.to_f64();
    if native.is_none() {
        log::warn!("Ignoring unparsable {slot} rating \"{key}\": {value}");
    }
    native
}

#[cfg(test)]
mod tests;
