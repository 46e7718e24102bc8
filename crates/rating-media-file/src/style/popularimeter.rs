// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use aoide_rating_core::{
    Scaler,
    scaler::player::{KNOWN_EXTERNAL_SCALERS, default_own_scaler},
};
use smol_str::SmolStr;

use super::{POPULARIMETER_SLOT, RatingStyle, WritePolicy, is_applicable, native_value};
use crate::{
    Rating, Result,
    container::{RawValue, TagContainer, TagFamily},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PopularimeterMode {
    /// Only the application's own entry.
    Own,

    /// Entries of third-party players.
    External,
}

/// Multiple, coexisting POPM entries, one per player.
///
/// The scalers are consulted in order. The first scaler that identifies
/// an entry decides about the rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularimeterStyle {
    mode: PopularimeterMode,
    scalers: Vec<Scaler>,
    write_policy: WritePolicy,
}

impl PopularimeterStyle {
    pub const TAG_FAMILIES: &'static [TagFamily] = &[TagFamily::Id3v2];

    #[must_use]
    pub fn own(scaler: Scaler) -> Self {
        Self {
            mode: PopularimeterMode::Own,
            scalers: vec![scaler],
            write_policy: WritePolicy::RefreshExisting,
        }
    }

    #[must_use]
    pub fn external(scalers: impl IntoIterator<Item = Scaler>) -> Self {
        Self {
            mode: PopularimeterMode::External,
            scalers: scalers.into_iter().collect(),
            write_policy: WritePolicy::RefreshExisting,
        }
    }

    #[must_use]
    pub fn default_own() -> Self {
        Self::own(default_own_scaler())
    }

    #[must_use]
    pub fn default_external() -> Self {
        Self::external(KNOWN_EXTERNAL_SCALERS.iter().cloned())
    }

    #[must_use]
    pub const fn with_write_policy(mut self, write_policy: WritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> PopularimeterMode {
        self.mode
    }

    #[must_use]
    pub fn scalers(&self) -> &[Scaler] {
        &self.scalers
    }

    #[must_use]
    pub const fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }
}

impl RatingStyle for PopularimeterStyle {
    fn get(&self, container: &dyn TagContainer) -> Result<Option<Rating>> {
        if !is_applicable(POPULARIMETER_SLOT, Self::TAG_FAMILIES, container) {
            return Ok(None);
        }
        let entries = container.raw_entries(POPULARIMETER_SLOT);
        for scaler in &self.scalers {
            let Some(key) = scaler.identify(entries.keys().map(SmolStr::as_str)) else {
                continue;
            };
            let Some(native) = entries
                .get(key)
                .and_then(|value| native_value(POPULARIMETER_SLOT, key, value))
            else {
                continue;
            };
            let rating = scaler.decode(native);
            log::debug!("Decoded {POPULARIMETER_SLOT} rating {native} of \"{key}\" as {rating}");
            return Ok(Some(rating));
        }
        log::trace!("No {mode:?} {POPULARIMETER_SLOT} rating found", mode = self.mode);
        Ok(None)
    }

    fn set(&self, container: &mut dyn TagContainer, rating: Option<Rating>) -> Result<()> {
        let Some(rating) = rating else {
            return Ok(());
        };
        if !is_applicable(POPULARIMETER_SLOT, Self::TAG_FAMILIES, container) {
            return Ok(());
        }
        let entries = container.raw_entries(POPULARIMETER_SLOT);
        for scaler in &self.scalers {
            let entry_exists = scaler
                .identify(entries.keys().map(SmolStr::as_str))
                .is_some();
            if !self.write_policy.permits_write(entry_exists) {
                log::debug!(
                    "Skipping missing {POPULARIMETER_SLOT} entry \"{key}\"",
                    key = scaler.key()
                );
                continue;
            }
            let native = scaler.encode_byte(rating);
            log::debug!(
                "Encoded {POPULARIMETER_SLOT} rating {rating} of \"{key}\" as {native}",
                key = scaler.key()
            );
            container.set_raw_entry(POPULARIMETER_SLOT, scaler.key(), RawValue::from(native));
        }
        Ok(())
    }
}
