// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration of the rating fields.

use std::collections::HashSet;

use aoide_rating_core::{
    Scaler,
    scaler::player::{DEFAULT_OWN_KEY, KNOWN_EXTERNAL_SCALERS, known_external_scaler, own_scaler},
};
use mime::Mime;
use semval::prelude::*;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{
    Error, Result,
    container::audio_flac,
    style::{DEFAULT_RATING_SUFFIXES, PlayerSlotStyle, WritePolicy},
};

/// Settings that control how ratings are read and written.
///
/// Missing fields are filled in with their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatingConfig {
    /// The key of the application's own POPM entry.
    pub own_key: SmolStr,

    /// Keys of third-party POPM entries in priority order.
    ///
    /// Only keys of known players are permitted.
    pub external_keys: Vec<SmolStr>,

    /// Suffixes of `RATING:<suffix>` fields in priority order.
    pub rating_suffixes: Vec<SmolStr>,

    /// The fixed key of the `WM/SharedUserRating` entry.
    pub player_slot_key: SmolStr,

    /// Containers of this media type receive `FMPS_RATING` entries.
    pub fractional_media_type: String,

    /// Containers of this media type store `RATING` entries as percentages.
    pub percent_media_type: String,

    pub popularimeter_write_policy: WritePolicy,

    pub suffixed_write_policy: WritePolicy,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            own_key: SmolStr::new_static(DEFAULT_OWN_KEY),
            external_keys: KNOWN_EXTERNAL_SCALERS
                .iter()
                .map(|scaler| SmolStr::new(scaler.key()))
                .collect(),
            rating_suffixes: DEFAULT_RATING_SUFFIXES
                .into_iter()
                .map(SmolStr::new_static)
                .collect(),
            player_slot_key: SmolStr::new(PlayerSlotStyle::default().key()),
            fractional_media_type: audio_flac().to_string(),
            percent_media_type: audio_flac().to_string(),
            popularimeter_write_policy: WritePolicy::RefreshExisting,
            suffixed_write_policy: WritePolicy::RecreateAll,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RatingConfigInvalidity {
    OwnKeyEmpty,
    ExternalKeyUnknown(SmolStr),
    ExternalKeyDuplicate(SmolStr),
    ExternalKeyIsOwnKey,
    RatingSuffixesEmpty,
    RatingSuffixDuplicate(SmolStr),
    PlayerSlotKeyEmpty,
    FractionalMediaType,
    PercentMediaType,
}

fn duplicates<'a>(keys: impl IntoIterator<Item = &'a SmolStr>) -> Vec<&'a SmolStr> {
    let mut visited = HashSet::new();
    keys.into_iter()
        .filter(|key| !visited.insert(*key))
        .collect()
}

impl Validate for RatingConfig {
    type Invalidity = RatingConfigInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            own_key,
            external_keys,
            rating_suffixes,
            player_slot_key,
            fractional_media_type,
            percent_media_type,
            popularimeter_write_policy: _,
            suffixed_write_policy: _,
        } = self;
        let mut context = ValidationContext::new()
            .invalidate_if(own_key.trim().is_empty(), Self::Invalidity::OwnKeyEmpty)
            .invalidate_if(
                external_keys.contains(own_key),
                Self::Invalidity::ExternalKeyIsOwnKey,
            )
            .invalidate_if(
                rating_suffixes.is_empty(),
                Self::Invalidity::RatingSuffixesEmpty,
            )
            .invalidate_if(
                player_slot_key.trim().is_empty(),
                Self::Invalidity::PlayerSlotKeyEmpty,
            )
            .invalidate_if(
                fractional_media_type.parse::<Mime>().is_err(),
                Self::Invalidity::FractionalMediaType,
            )
            .invalidate_if(
                percent_media_type.parse::<Mime>().is_err(),
                Self::Invalidity::PercentMediaType,
            );
        for key in external_keys {
            context = context.invalidate_if(
                known_external_scaler(key).is_none(),
                Self::Invalidity::ExternalKeyUnknown(key.clone()),
            );
        }
        for key in duplicates(external_keys) {
            context = context.invalidate(Self::Invalidity::ExternalKeyDuplicate(key.clone()));
        }
        for suffix in duplicates(rating_suffixes) {
            context = context.invalidate(Self::Invalidity::RatingSuffixDuplicate(suffix.clone()));
        }
        context.into()
    }
}

impl RatingConfig {
    /// Validates the configuration.
    ///
    /// All invalidities are reported in a single [`Error::InvalidConfig`].
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(|invalidities| {
            let reasons = invalidities
                .into_iter()
                .map(|invalidity| format!("{invalidity:?}"))
                .collect::<Vec<_>>();
            Error::InvalidConfig(reasons.join(", "))
        })
    }

    pub fn from_ron_str(ron: &str) -> Result<Self> {
        let config: Self = ron::from_str(ron)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, Default::default()).map_err(Into::into)
    }

    /// The scaler of the application's own POPM entry.
    #[must_use]
    pub fn own_scaler(&self) -> Scaler {
        own_scaler(self.own_key.to_string())
    }

    /// The scalers of third-party POPM entries in priority order.
    ///
    /// Unknown keys are skipped.
    pub fn external_scalers(&self) -> impl Iterator<Item = Scaler> + '_ {
        self.external_keys
            .iter()
            .filter_map(|key| known_external_scaler(key).cloned())
    }
}
