// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use lofty::tag::{ItemKey, Tag, TagType};
use mime::Mime;
use smol_str::SmolStr;

use super::{field_name, split_field_name};
use crate::{
    container::{RawValue, SlotEntries, TagContainer, TagFamily},
    style::POPULARIMETER_SLOT,
};

/// Rating entries in a format-agnostic [`Tag`].
///
/// Entries are stored as text items with custom keys. Whether a custom
/// key is accepted depends on the [`lofty::tag::TagType`], e.g. APE and
/// Vorbis Comments accept arbitrary names. The POPM slot is always empty.
pub struct GenericTagContainer<'t> {
    tag: &'t mut Tag,
    media_type: Mime,
}

impl<'t> GenericTagContainer<'t> {
    #[must_use]
    pub fn new(tag: &'t mut Tag, media_type: Mime) -> Self {
        Self { tag, media_type }
    }
}

impl fmt::Debug for GenericTagContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericTagContainer")
            .field("tag_type", &self.tag.tag_type())
            .field("media_type", &self.media_type)
            .finish_non_exhaustive()
    }
}

impl TagContainer for GenericTagContainer<'_> {
    fn tag_family(&self) -> TagFamily {
        match self.tag.tag_type() {
            TagType::Id3v2 => TagFamily::Id3v2,
            TagType::VorbisComments => TagFamily::Vorbis,
            TagType::Ape => TagFamily::Ape,
            _ => TagFamily::Other,
        }
    }

    fn media_type(&self) -> &Mime {
        &self.media_type
    }

    fn raw_entries(&self, slot: &str) -> SlotEntries {
        if slot == POPULARIMETER_SLOT {
            return SlotEntries::new();
        }
        self.tag
            .items()
            .filter_map(|item| {
                let ItemKey::Unknown(name) = item.key() else {
                    return None;
                };
                let key = split_field_name(slot, name)?;
                let text = item.value().text()?;
                Some((SmolStr::new(key), RawValue::Text(text.to_owned())))
            })
            .collect()
    }

    fn set_raw_entry(&mut self, slot: &str, key: &str, value: RawValue) {
        if slot == POPULARIMETER_SLOT {
            log::debug!("Generic tag cannot store POPM entry \"{key}\": {value}");
            return;
        }
        let name = field_name(slot, key);
        if !self
            .tag
            .insert_text(ItemKey::Unknown(name.clone()), value.to_text().into_owned())
        {
            log::warn!(
                "Failed to set item \"{name}\" in {tag_type:?} tag: {value}",
                tag_type = self.tag.tag_type()
            );
        }
    }
}
