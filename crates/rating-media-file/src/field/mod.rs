// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Logical rating fields, each backed by multiple storage styles.

use crate::{
    Rating, Result,
    config::RatingConfig,
    container::TagContainer,
    style::{
        FractionalStyle, PlayerSlotStyle, PopularimeterStyle, RatingStyle, StorageStyle,
        SuffixedStyle,
    },
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// The rating of the application itself.
    Own,

    /// The rating observed from other players.
    External,
}

/// A rating field with storage styles in priority order.
///
/// Reading returns the first rating that is found. Writing stores
/// the rating in all styles that are applicable for the container.
#[derive(Debug, Clone)]
pub struct RatingField {
    kind: FieldKind,
    styles: Vec<StorageStyle>,
}

impl RatingField {
    #[must_use]
    pub fn new(kind: FieldKind, styles: impl IntoIterator<Item = StorageStyle>) -> Self {
        Self {
            kind,
            styles: styles.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub fn styles(&self) -> &[StorageStyle] {
        &self.styles
    }

    pub fn read(&self, container: &dyn TagContainer) -> Result<Option<Rating>> {
        for style in &self.styles {
            if let Some(rating) = style.get(container)? {
                log::debug!("Read {kind:?} rating {rating}", kind = self.kind);
                return Ok(Some(rating));
            }
        }
        log::trace!("No {kind:?} rating found", kind = self.kind);
        Ok(None)
    }

    /// Writes the rating through all styles.
    ///
    /// Writing `None` does nothing.
    pub fn write(&self, container: &mut dyn TagContainer, rating: Option<Rating>) -> Result<()> {
        if rating.is_none() {
            return Ok(());
        }
        for style in &self.styles {
            style.set(container, rating)?;
        }
        Ok(())
    }

    /// Lists are only supported if all styles support them.
    pub fn read_list(&self, container: &dyn TagContainer) -> Result<Vec<Rating>> {
        for style in &self.styles {
            let ratings = style.get_list(container)?;
            if !ratings.is_empty() {
                return Ok(ratings);
            }
        }
        Ok(Vec::new())
    }

    /// Lists are only supported if all styles support them.
    pub fn write_list(&self, container: &mut dyn TagContainer, ratings: &[Rating]) -> Result<()> {
        for style in &self.styles {
            style.set_list(container, ratings)?;
        }
        Ok(())
    }
}

/// The own and the external rating field.
#[derive(Debug, Clone)]
pub struct RatingFields {
    pub own: RatingField,
    pub external: RatingField,
}

impl RatingFields {
    /// Composes both fields from a validated configuration.
    pub fn from_config(config: &RatingConfig) -> Result<Self> {
        config.validate()?;
        let fractional = FractionalStyle::new(config.fractional_media_type.parse()?);
        let suffixed = SuffixedStyle::new(
            config.rating_suffixes.iter().cloned(),
            config.percent_media_type.parse()?,
        )
        .with_write_policy(config.suffixed_write_policy);
        let player_slot = PlayerSlotStyle::new(config.player_slot_key.clone());
        let own = PopularimeterStyle::own(config.own_scaler())
            .with_write_policy(config.popularimeter_write_policy);
        let external = PopularimeterStyle::external(config.external_scalers())
            .with_write_policy(config.popularimeter_write_policy);
        let field = |kind, popularimeter: PopularimeterStyle| {
            RatingField::new(
                kind,
                [
                    fractional.clone().into(),
                    popularimeter.into(),
                    suffixed.clone().into(),
                    player_slot.clone().into(),
                ],
            )
        };
        Ok(Self {
            own: field(FieldKind::Own, own),
            external: field(FieldKind::External, external),
        })
    }

    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &RatingField {
        match kind {
            FieldKind::Own => &self.own,
            FieldKind::External => &self.external,
        }
    }
}

impl Default for RatingFields {
    fn default() -> Self {
        let field = |kind, popularimeter: PopularimeterStyle| {
            RatingField::new(
                kind,
                [
                    FractionalStyle::default().into(),
                    popularimeter.into(),
                    SuffixedStyle::default().into(),
                    PlayerSlotStyle::default().into(),
                ],
            )
        };
        Self {
            own: field(FieldKind::Own, PopularimeterStyle::default_own()),
            external: field(FieldKind::External, PopularimeterStyle::default_external()),
        }
    }
}
