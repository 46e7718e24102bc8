// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use mime::Mime;

use super::{FMPS_RATING_SLOT, RatingStyle, is_applicable, native_value};
use crate::{
    Rating, Result,
    container::{IMPLICIT_KEY, RawValue, TagContainer, TagFamily, audio_flac, is_media_type},
};

/// A single fraction between 0.0 and 1.0 with one decimal place.
///
/// Only written into containers of the target media type. Reading
/// is not restricted by the media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionalStyle {
    target_media_type: Mime,
}

impl FractionalStyle {
    pub const TAG_FAMILIES: &'static [TagFamily] = &[TagFamily::Vorbis, TagFamily::Ape];

    #[must_use]
    pub const fn new(target_media_type: Mime) -> Self {
        Self { target_media_type }
    }

    #[must_use]
    pub const fn target_media_type(&self) -> &Mime {
        &self.target_media_type
    }
}

impl Default for FractionalStyle {
    fn default() -> Self {
        Self::new(audio_flac())
    }
}

impl RatingStyle for FractionalStyle {
    fn get(&self, container: &dyn TagContainer) -> Result<Option<Rating>> {
        if !is_applicable(FMPS_RATING_SLOT, Self::TAG_FAMILIES, container) {
            return Ok(None);
        }
        let entries = container.raw_entries(FMPS_RATING_SLOT);
        let Some(native) = entries
            .get(IMPLICIT_KEY)
            .and_then(|value| native_value(FMPS_RATING_SLOT, IMPLICIT_KEY, value))
        else {
            log::trace!("No {FMPS_RATING_SLOT} rating found");
            return Ok(None);
        };
        if !(0.0..=1.0).contains(&native) {
            log::warn!("Clamping out-of-range {FMPS_RATING_SLOT} rating {native}");
        }
        let rating = Rating::from_f64_rounded(native * f64::from(Rating::MAX.value()));
        Ok(Some(rating))
    }

    fn set(&self, container: &mut dyn TagContainer, rating: Option<Rating>) -> Result<()> {
        let Some(rating) = rating else {
            return Ok(());
        };
        if !is_applicable(FMPS_RATING_SLOT, Self::TAG_FAMILIES, container) {
            return Ok(());
        }
        if !is_media_type(container.media_type(), &self.target_media_type) {
            log::trace!(
                "Not writing {FMPS_RATING_SLOT} rating into {media_type}",
                media_type = container.media_type()
            );
            return Ok(());
        }
        let native = format!("{:.1}", rating.to_fraction());
        log::debug!("Encoded {FMPS_RATING_SLOT} rating {rating} as {native}");
        container.set_raw_entry(FMPS_RATING_SLOT, IMPLICIT_KEY, RawValue::Text(native));
        Ok(())
    }
}
