// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use aoide_rating_core::{
    Calibration,
    scaler::player::{
        BANSHEE_KEY, LINEAR_BYTE, LINEAR_PERCENT, MEDIA_MONKEY_KEY, WINAMP_KEY,
        WINDOWS_MEDIA_PLAYER_KEY,
    },
};
use mime::Mime;
use smol_str::SmolStr;

use super::{RATING_SLOT, RatingStyle, WritePolicy, is_applicable, native_value};
use crate::{
    Rating, Result,
    container::{IMPLICIT_KEY, RawValue, TagContainer, TagFamily, audio_flac, is_media_type},
};

/// The suffixes of `RATING:<suffix>` fields in their default priority order.
pub const DEFAULT_RATING_SUFFIXES: [&str; 5] = [
    MEDIA_MONKEY_KEY,
    WINDOWS_MEDIA_PLAYER_KEY,
    WINAMP_KEY,
    IMPLICIT_KEY,
    BANSHEE_KEY,
];

/// Text fields `RATING:<suffix>` with a linear native domain.
///
/// Ratings are stored as percentages in containers of the percent
/// media type and in the full byte range otherwise. The empty suffix
/// denotes the plain `RATING` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixedStyle {
    suffixes: Vec<SmolStr>,
    percent_media_type: Mime,
    write_policy: WritePolicy,
}

impl SuffixedStyle {
    pub const TAG_FAMILIES: &'static [TagFamily] = &[TagFamily::Vorbis, TagFamily::Ape];

    #[must_use]
    pub fn new(suffixes: impl IntoIterator<Item = SmolStr>, percent_media_type: Mime) -> Self {
        Self {
            suffixes: suffixes.into_iter().collect(),
            percent_media_type,
            write_policy: WritePolicy::RecreateAll,
        }
    }

    #[must_use]
    pub const fn with_write_policy(mut self, write_policy: WritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }

    #[must_use]
    pub fn suffixes(&self) -> &[SmolStr] {
        &self.suffixes
    }

    #[must_use]
    pub const fn percent_media_type(&self) -> &Mime {
        &self.percent_media_type
    }

    #[must_use]
    pub const fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }

    /// The native domain for the given container.
    #[must_use]
    pub fn calibration(&self, media_type: &Mime) -> Calibration {
        if is_media_type(media_type, &self.percent_media_type) {
            LINEAR_PERCENT
        } else {
            LINEAR_BYTE
        }
    }
}

impl Default for SuffixedStyle {
    fn default() -> Self {
        Self::new(
            DEFAULT_RATING_SUFFIXES.into_iter().map(SmolStr::new_static),
            audio_flac(),
        )
    }
}

impl RatingStyle for SuffixedStyle {
    fn get(&self, container: &dyn TagContainer) -> Result<Option<Rating>> {
        if !is_applicable(RATING_SLOT, Self::TAG_FAMILIES, container) {
            return Ok(None);
        }
        let entries = container.raw_entries(RATING_SLOT);
        let calibration = self.calibration(container.media_type());
        for suffix in &self.suffixes {
            let Some(native) = entries
                .get(suffix)
                .and_then(|value| native_value(RATING_SLOT, suffix, value))
            else {
                continue;
            };
            if !(0.0..=calibration.native_max()).contains(&native) {
                log::warn!("Clamping out-of-range {RATING_SLOT} rating \"{suffix}\": {native}");
            }
            let rating = calibration.decode(native);
            log::debug!("Decoded {RATING_SLOT} rating {native} of \"{suffix}\" as {rating}");
            return Ok(Some(rating));
        }
        log::trace!("No {RATING_SLOT} rating found");
        Ok(None)
    }

    fn set(&self, container: &mut dyn TagContainer, rating: Option<Rating>) -> Result<()> {
        let Some(rating) = rating else {
            return Ok(());
        };
        if !is_applicable(RATING_SLOT, Self::TAG_FAMILIES, container) {
            return Ok(());
        }
        let native = self.calibration(container.media_type()).encode(rating);
        let entries = container.raw_entries(RATING_SLOT);
        for suffix in &self.suffixes {
            if !self
                .write_policy
                .permits_write(entries.contains_key(suffix))
            {
                log::debug!("Skipping missing {RATING_SLOT} entry \"{suffix}\"");
                continue;
            }
            log::debug!("Encoded {RATING_SLOT} rating {rating} of \"{suffix}\" as {native}");
            container.set_raw_entry(RATING_SLOT, suffix, RawValue::Text(native.to_string()));
        }
        Ok(())
    }
}
