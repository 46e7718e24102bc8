// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeMap;

use mime::Mime;
use smol_str::SmolStr;

use super::{RawValue, SlotEntries, TagContainer, TagFamily};

/// Tags that are kept in memory.
///
/// Useful for hosts that manage file tags with their own model.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryTags {
    tag_family: TagFamily,
    media_type: Mime,
    slots: BTreeMap<SmolStr, SlotEntries>,
}

impl MemoryTags {
    #[must_use]
    pub const fn new(tag_family: TagFamily, media_type: Mime) -> Self {
        Self {
            tag_family,
            media_type,
            slots: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, slot: &str, key: &str, value: impl Into<RawValue>) -> Self {
        self.set_raw_entry(slot, key, value.into());
        self
    }

    #[must_use]
    pub fn entry(&self, slot: &str, key: &str) -> Option<&RawValue> {
        self.slots.get(slot).and_then(|entries| entries.get(key))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(BTreeMap::is_empty)
    }

    /// The total number of entries in all slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.values().map(BTreeMap::len).sum()
    }

    pub fn slots(&self) -> impl Iterator<Item = (&str, &SlotEntries)> {
        self.slots
            .iter()
            .map(|(slot, entries)| (slot.as_str(), entries))
    }
}

impl TagContainer for MemoryTags {
    fn tag_family(&self) -> TagFamily {
        self.tag_family
    }

    fn media_type(&self) -> &Mime {
        &self.media_type
    }

    fn raw_entries(&self, slot: &str) -> SlotEntries {
        self.slots.get(slot).cloned().unwrap_or_default()
    }

    fn set_raw_entry(&mut self, slot: &str, key: &str, value: RawValue) {
        self.slots
            .entry(slot.into())
            .or_default()
            .insert(key.into(), value);
    }
}
