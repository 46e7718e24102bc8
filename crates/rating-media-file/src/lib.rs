// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reading and writing track ratings in file tags.
//!
//! Media players store ratings in different, incompatible tag conventions.
//! A [`field::RatingField`] composes multiple [`style::StorageStyle`]s,
//! one per convention, that translate between the raw entries of a
//! [`container::TagContainer`] and a canonical [`Rating`].
//!
//! No file I/O is performed here. Tags are read and written by the caller
//! before and after accessing ratings.

pub mod config;
pub mod container;
pub mod field;
pub mod fmt;
pub mod style;

use std::result::Result as StdResult;

pub use aoide_rating_core::Rating;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Config(anyhow::Error),
}

pub type Result<T> = StdResult<T, Error>;

impl From<mime::FromStrError> for Error {
    fn from(err: mime::FromStrError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

impl From<ron::error::SpannedError> for Error {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::Config(err.into())
    }
}

impl From<ron::Error> for Error {
    fn from(err: ron::Error) -> Self {
        Self::Config(err.into())
    }
}

pub mod prelude {
    pub use super::{
        Error, Rating, Result,
        container::{TagContainer, TagFamily},
        field::{FieldKind, RatingField, RatingFields},
        style::{RatingStyle, StorageStyle, WritePolicy},
    };
}
