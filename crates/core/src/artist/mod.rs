// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use derive_more::{Display, From};
use smol_str::SmolStr;
use strum::EnumString;

use crate::prelude::*;

///////////////////////////////////////////////////////////////////////
// ArtistId
///////////////////////////////////////////////////////////////////////

/// Opaque identifier of an artist.
///
/// Identity of an [`Artist`] is defined by this id, never by the name.
/// An empty id marks an artist that has been synthesized from missing
/// record fields and renders as a blank link target.
#[derive(Clone, Debug, Default, Display, From, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ArtistId(SmolStr);

impl ArtistId {
    #[must_use]
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ArtistId {
    fn from(from: &str) -> Self {
        Self(from.into())
    }
}

#[derive(Copy, Clone, Debug)]
pub enum ArtistIdInvalidity {
    Empty,
}

impl Validate for ArtistId {
    type Invalidity = ArtistIdInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(self.is_empty(), Self::Invalidity::Empty)
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Role
///////////////////////////////////////////////////////////////////////

/// Participant roles of an artist on a record.
///
/// Parsed case-insensitively from the caller-supplied source field
/// name, i.e. both `"albumArtist"` and `"albumartist"` select
/// [`Role::AlbumArtist`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    #[default]
    Artist,
    AlbumArtist,
    Composer,
    Conductor,
    Lyricist,
    Arranger,
    Remixer,
    Producer,
    Director,
    Engineer,
    Mixer,
    DjMixer,
    Performer,
}

impl Role {
    /// Parses the role from a record source field name.
    ///
    /// Returns `None` for unknown sources. Callers degrade to empty
    /// output in that case instead of failing.
    #[must_use]
    pub fn from_source(source: &str) -> Option<Self> {
        source.parse().ok()
    }
}

///////////////////////////////////////////////////////////////////////
// Artist
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artist {
    pub id: ArtistId,

    /// The display name, used for substring matching and rendering.
    ///
    /// Two distinct artists may share a name.
    pub name: String,
}

impl Artist {
    #[must_use]
    pub fn new(id: impl Into<ArtistId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub fn is_valid_artist_name(name: impl AsRef<str>) -> bool {
    let name = name.as_ref();
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed == name
}

#[derive(Copy, Clone, Debug)]
pub enum ArtistInvalidity {
    Id(ArtistIdInvalidity),
    Name,
}

impl Validate for Artist {
    type Invalidity = ArtistInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.id, Self::Invalidity::Id)
            .invalidate_if(!is_valid_artist_name(&self.name), Self::Invalidity::Name)
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
