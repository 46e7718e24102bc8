// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use aoide_rating_core::scaler::player::MEDIA_MONKEY_KEY;
use smol_str::SmolStr;

use super::{RatingStyle, WM_SHARED_USER_RATING_SLOT, is_applicable, native_value};
use crate::{
    Rating, Result,
    container::{RawValue, TagContainer, TagFamily},
};

/// A single integer entry with a fixed key, e.g. `WM/SharedUserRating`.
///
/// The native value is already a canonical rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSlotStyle {
    key: SmolStr,
}

impl PlayerSlotStyle {
    pub const TAG_FAMILIES: &'static [TagFamily] = &[TagFamily::Asf];

    #[must_use]
    pub const fn new(key: SmolStr) -> Self {
        Self { key }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for PlayerSlotStyle {
    fn default() -> Self {
        Self::new(SmolStr::new_static(MEDIA_MONKEY_KEY))
    }
}

impl RatingStyle for PlayerSlotStyle {
    fn get(&self, container: &dyn TagContainer) -> Result<Option<Rating>> {
        if !is_applicable(WM_SHARED_USER_RATING_SLOT, Self::TAG_FAMILIES, container) {
            return Ok(None);
        }
        let entries = container.raw_entries(WM_SHARED_USER_RATING_SLOT);
        let Some(native) = entries
            .get(&self.key)
            .and_then(|value| native_value(WM_SHARED_USER_RATING_SLOT, &self.key, value))
        else {
            log::trace!("No {WM_SHARED_USER_RATING_SLOT} rating found");
            return Ok(None);
        };
        let max = f64::from(Rating::MAX.value());
        if !(0.0..=max).contains(&native.round()) {
            log::warn!("Clamping out-of-range {WM_SHARED_USER_RATING_SLOT} rating {native}");
        }
        Ok(Some(Rating::from_f64_rounded(native)))
    }

    fn set(&self, container: &mut dyn TagContainer, rating: Option<Rating>) -> Result<()> {
        let Some(rating) = rating else {
            return Ok(());
        };
        if !is_applicable(WM_SHARED_USER_RATING_SLOT, Self::TAG_FAMILIES, container) {
            return Ok(());
        }
        log::debug!("Writing {WM_SHARED_USER_RATING_SLOT} rating {rating}");
        container.set_raw_entry(
            WM_SHARED_USER_RATING_SLOT,
            &self.key,
            RawValue::from(rating.value()),
        );
        Ok(())
    }
}
