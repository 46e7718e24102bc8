// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tag containers for the tag types of [`lofty`].

mod generic;
pub use self::generic::GenericTagContainer;

mod id3v2;
pub use self::id3v2::Id3v2Container;

mod vorbis;
pub use self::vorbis::VorbisContainer;

use crate::container::IMPLICIT_KEY;

const FIELD_KEY_SEPARATOR: char = ':';

/// The name of a text field that stores a slot entry.
///
/// The implicit key maps onto the plain slot name, e.g. `FMPS_RATING`.
/// All other keys are appended as a suffix, e.g. `RATING:Banshee`.
#[must_use]
pub fn field_name(slot: &str, key: &str) -> String {
    if key == IMPLICIT_KEY {
        slot.to_owned()
    } else {
        format!("{slot}{FIELD_KEY_SEPARATOR}{key}")
    }
}

/// Splits the key from a text field name of the given slot.
///
/// Slot names are matched case-insensitively. Returns `None` if the
/// field does not belong to the slot.
#[must_use]
pub fn split_field_name<'n>(slot: &str, name: &'n str) -> Option<&'n str> {
    let prefix = name.get(..slot.len())?;
    if !prefix.eq_ignore_ascii_case(slot) {
        return None;
    }
    let remainder = &name[slot.len()..];
    if remainder.is_empty() {
        return Some(IMPLICIT_KEY);
    }
    remainder.strip_prefix(FIELD_KEY_SEPARATOR)
}
