// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::ogg::VorbisComments;
use mime::Mime;
use smol_str::SmolStr;

use super::{field_name, split_field_name};
use crate::{
    container::{RawValue, SlotEntries, TagContainer, TagFamily},
    style::POPULARIMETER_SLOT,
};

/// Rating entries in Vorbis Comments, e.g. of FLAC or Ogg files.
///
/// Each entry is stored in a separate field. Vorbis Comments have
/// no popularimeter and the POPM slot is always empty.
#[derive(Debug)]
pub struct VorbisContainer<'t> {
    comments: &'t mut VorbisComments,
    media_type: Mime,
}

impl<'t> VorbisContainer<'t> {
    #[must_use]
    pub fn new(comments: &'t mut VorbisComments, media_type: Mime) -> Self {
        Self {
            comments,
            media_type,
        }
    }
}

impl TagContainer for VorbisContainer<'_> {
    fn tag_family(&self) -> TagFamily {
        TagFamily::Vorbis
    }

    fn media_type(&self) -> &Mime {
        &self.media_type
    }

    fn raw_entries(&self, slot: &str) -> SlotEntries {
        if slot == POPULARIMETER_SLOT {
            return SlotEntries::new();
        }
        self.comments
            .items()
            .filter_map(|(name, value)| {
                let key = split_field_name(slot, name)?;
                Some((SmolStr::new(key), RawValue::Text(value.to_owned())))
            })
            .collect()
    }

    fn set_raw_entry(&mut self, slot: &str, key: &str, value: RawValue) {
        if slot == POPULARIMETER_SLOT {
            log::debug!("Vorbis Comments cannot store POPM entry \"{key}\": {value}");
            return;
        }
        let name = field_name(slot, key);
        log::debug!("Setting Vorbis Comment \"{name}\": {value}");
        self.comments.insert(name, value.to_text().into_owned());
    }
}
