// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{borrow::Cow, collections::BTreeMap, fmt};

use mime::Mime;
use smol_str::SmolStr;

mod memory;
pub use self::memory::MemoryTags;

/// The key of single-slot conventions without an identifying key.
pub const IMPLICIT_KEY: &str = "";

/// A native rating value as stored in a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Integer(i64),
    Text(String),
}

impl RawValue {
    /// Interprets the value as a number.
    ///
    /// Text is trimmed and parsed as a floating-point number. Returns
    /// `None` if the text is not a finite number.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
        }
    }

    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Integer(value) => Cow::Owned(value.to_string()),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<u8> for RawValue {
    fn from(from: u8) -> Self {
        Self::Integer(from.into())
    }
}

impl From<i64> for RawValue {
    fn from(from: i64) -> Self {
        Self::Integer(from)
    }
}

impl From<String> for RawValue {
    fn from(from: String) -> Self {
        Self::Text(from)
    }
}

impl From<&str> for RawValue {
    fn from(from: &str) -> Self {
        Self::Text(from.to_owned())
    }
}

/// The tag format of a container.
///
/// Each tag convention is only stored in tags of certain formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TagFamily {
    /// ID3v2, e.g. MP3, AIFF, or WAVE files.
    Id3v2,

    /// Vorbis Comments, e.g. FLAC, Ogg, or Opus files.
    Vorbis,

    /// APEv2, e.g. Monkey's Audio, WavPack, or Musepack files.
    Ape,

    /// Windows Media (ASF) attributes.
    Asf,

    Other,
}

/// All entries of a slot, indexed by their identifying key.
pub type SlotEntries = BTreeMap<SmolStr, RawValue>;

/// The tags of a single media file.
///
/// A slot is a named location for rating entries, e.g. the POPM frames
/// of an ID3v2 tag or the `RATING` fields of Vorbis Comments. Multiple
/// entries per slot are distinguished by their key. Conventions with
/// only a single entry per slot use [`IMPLICIT_KEY`].
///
/// Implementations only access the in-memory representation of tags
/// that have been read before and are written afterwards.
pub trait TagContainer {
    fn tag_family(&self) -> TagFamily;

    /// The declared media type of the file, e.g. `audio/flac`.
    fn media_type(&self) -> &Mime;

    /// All entries of the slot, empty if the slot is unused.
    fn raw_entries(&self, slot: &str) -> SlotEntries;

    /// Inserts or replaces a single entry of a slot.
    fn set_raw_entry(&mut self, slot: &str, key: &str, value: RawValue);
}

/// The media type of FLAC files, i.e. `audio/flac`.
#[must_use]
pub fn audio_flac() -> Mime {
    "audio/flac".parse().expect("valid MIME type")
}

/// Compares the essence of media types, ignoring parameters and case.
#[must_use]
pub fn is_media_type(declared: &Mime, target: &Mime) -> bool {
    declared
        .essence_str()
        .eq_ignore_ascii_case(target.essence_str())
}
