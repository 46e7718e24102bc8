// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Canonical track ratings and the numeric scales of media players.
//!
//! A [`Rating`] counts half stars from 0 (no stars) to 10 (five stars).
//! Players store ratings in their own native domains. Each [`Scaler`]
//! converts between one of these domains and the canonical rating.

pub mod rating;
pub use self::rating::{Rating, RatingInvalidity, RatingValue};

pub mod scaler;
pub use self::scaler::{Calibration, CalibrationInvalidity, Scaler};

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IsValid, Validate as _};

    pub use crate::{Calibration, Rating, Scaler};
}
