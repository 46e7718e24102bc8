// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Normalization of music track ratings.
//!
//! Re-exports the member crates of the workspace.

pub use aoide_rating_core::{self as rating_core, Rating};

#[cfg(feature = "media-file")]
pub use aoide_rating_media_file as media_file;
