// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use lofty::id3::v2::{Frame, Id3v2Tag, PopularimeterFrame};
use mime::Mime;
use smol_str::SmolStr;

use super::{field_name, split_field_name};
use crate::{
    container::{RawValue, SlotEntries, TagContainer, TagFamily},
    style::POPULARIMETER_SLOT,
};

/// Rating entries in an ID3v2 tag.
///
/// The POPM slot maps onto popularimeter frames, using the email field
/// as the key. All other slots are stored in TXXX frames.
#[derive(Debug)]
pub struct Id3v2Container<'t> {
    tag: &'t mut Id3v2Tag,
    media_type: Mime,
}

impl<'t> Id3v2Container<'t> {
    #[must_use]
    pub fn new(tag: &'t mut Id3v2Tag, media_type: Mime) -> Self {
        Self { tag, media_type }
    }

    fn popularimeter_entries(&self) -> SlotEntries {
        let tag: &Id3v2Tag = &*self.tag;
        tag.into_iter()
            .filter_map(|frame| {
                let Frame::Popularimeter(popm) = frame else {
                    return None;
                };
                Some((SmolStr::new(&popm.email), RawValue::from(popm.rating)))
            })
            .collect()
    }

    fn set_popularimeter_entry(&mut self, key: &str, value: &RawValue) {
        let Some(rating) = value
            .to_f64()
            .map(|native| native.round().clamp(0.0, f64::from(u8::MAX)) as u8)
        else {
            log::warn!("Ignoring invalid POPM rating for \"{key}\": {value}");
            return;
        };
        // The play counter is not related to the rating and must be preserved
        let tag: &Id3v2Tag = &*self.tag;
        let counter = tag
            .into_iter()
            .find_map(|frame| match frame {
                Frame::Popularimeter(popm) if popm.email == key => Some(popm.counter),
                _ => None,
            })
            .unwrap_or_default();
        self.tag.retain(|frame| {
            !matches!(frame, Frame::Popularimeter(popm) if popm.email == key)
        });
        let popm = PopularimeterFrame::new(key.to_owned(), rating, counter);
        self.tag.insert(Frame::Popularimeter(popm));
    }

    fn user_text_entries(&self, slot: &str) -> SlotEntries {
        let tag: &Id3v2Tag = &*self.tag;
        tag.into_iter()
            .filter_map(|frame| {
                let Frame::UserText(txxx) = frame else {
                    return None;
                };
                let key = split_field_name(slot, &txxx.description)?;
                Some((SmolStr::new(key), RawValue::Text(txxx.content.to_string())))
            })
            .collect()
    }

    fn set_user_text_entry(&mut self, slot: &str, key: &str, value: &RawValue) {
        // Descriptions are matched case-insensitively when reading
        self.tag.retain(|frame| {
            let Frame::UserText(txxx) = frame else {
                return true;
            };
            split_field_name(slot, &txxx.description)
                .is_none_or(|existing| !existing.eq_ignore_ascii_case(key))
        });
        let description = field_name(slot, key);
        log::debug!("Setting ID3v2 TXXX frame \"{description}\": {value}");
        self.tag
            .insert_user_text(description, value.to_text().into_owned());
    }
}

impl TagContainer for Id3v2Container<'_> {
    fn tag_family(&self) -> TagFamily {
        TagFamily::Id3v2
    }

    fn media_type(&self) -> &Mime {
        &self.media_type
    }

    fn raw_entries(&self, slot: &str) -> SlotEntries {
        if slot == POPULARIMETER_SLOT {
            self.popularimeter_entries()
        } else {
            self.user_text_entries(slot)
        }
    }

    fn set_raw_entry(&mut self, slot: &str, key: &str, value: RawValue) {
        if slot == POPULARIMETER_SLOT {
            self.set_popularimeter_entry(key, &value);
        } else {
            self.set_user_text_entry(slot, key, &value);
        }
    }
}
