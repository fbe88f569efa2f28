// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use hashbrown::HashMap;

use crate::{
    artist::{Artist, ArtistId, ArtistIdInvalidity, ArtistInvalidity, Role},
    prelude::*,
};

/// Display name of an artist that could not be determined.
pub const UNKNOWN_ARTIST: &str = "[Unknown Artist]";

/// Display name of the album artist of a compilation.
pub const VARIOUS_ARTISTS: &str = "Various Artists";

///////////////////////////////////////////////////////////////////////
// Participants
///////////////////////////////////////////////////////////////////////

/// Mapping from a participant [`Role`] to the ordered list of credited
/// artists for that role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Participants(HashMap<Role, Vec<Artist>>);

impl Participants {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: Role, artists: Vec<Artist>) -> Option<Vec<Artist>> {
        self.0.insert(role, artists)
    }

    #[must_use]
    pub fn get(&self, role: Role) -> Option<&[Artist]> {
        self.0.get(&role).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &[Artist])> + Clone {
        self.0.iter().map(|(role, artists)| (*role, artists.as_slice()))
    }
}

impl FromIterator<(Role, Vec<Artist>)> for Participants {
    fn from_iter<I: IntoIterator<Item = (Role, Vec<Artist>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///////////////////////////////////////////////////////////////////////
// Credit
///////////////////////////////////////////////////////////////////////

/// Scalar fallback credit of a record for a single role, i.e. the
/// flattened id/name column pair that predates per-role participant
/// lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credit {
    pub id: ArtistId,
    pub name: String,
}

impl Credit {
    #[must_use]
    pub fn new(id: impl Into<ArtistId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    #[must_use]
    fn to_artist(&self) -> Artist {
        let Self { id, name } = self;
        Artist {
            id: id.clone(),
            name: name.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum CreditInvalidity {
    Id(ArtistIdInvalidity),
    NameEmpty,
}

impl Validate for Credit {
    type Invalidity = CreditInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .validate_with(&self.id, Self::Invalidity::Id)
            .invalidate_if(self.name.is_empty(), Self::Invalidity::NameEmpty)
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Record
///////////////////////////////////////////////////////////////////////

/// A media record (track or album) with its artist credits.
///
/// All fields are read-only inputs from the caller's point of view.
/// Resolution never mutates them, not even when merging remixers into
/// the resolved artist list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Per-role participant lists. Absent for records imported before
    /// participants were tracked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub participants: Option<Participants>,

    /// Scalar fallback credits, keyed by role. The credited name also
    /// serves as the raw display string for that role, e.g. the
    /// album artist name `"A feat. B"` that gets segmented.
    #[cfg_attr(feature = "serde", serde(default))]
    pub credits: HashMap<Role, Credit>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub compilation: bool,
}

impl Record {
    #[must_use]
    pub fn credit(&self, role: Role) -> Option<&Credit> {
        self.credits.get(&role)
    }

    /// The raw display string credited for the given role.
    ///
    /// Empty when the record carries no such credit. Rendering then
    /// degrades to blank output instead of failing.
    #[must_use]
    pub fn display_name(&self, role: Role) -> &str {
        self.credit(role).map_or("", |credit| credit.name.as_str())
    }

    /// The album artist display name with the conventional fallback
    /// chain: credited album artist, [`VARIOUS_ARTISTS`] for
    /// compilations, the track artist, [`UNKNOWN_ARTIST`].
    #[must_use]
    pub fn display_album_artist(&self) -> &str {
        let album_artist = self.display_name(Role::AlbumArtist);
        if !album_artist.is_empty() {
            return album_artist;
        }
        if self.compilation {
            return VARIOUS_ARTISTS;
        }
        let artist = self.display_name(Role::Artist);
        if !artist.is_empty() {
            return artist;
        }
        UNKNOWN_ARTIST
    }

    fn synthesized_artist(&self, role: Role) -> Artist {
        self.credit(role).map(Credit::to_artist).unwrap_or_default()
    }

    /// Resolves the ordered list of artists credited for the given role.
    ///
    /// The base list is the participant list for the role when present,
    /// otherwise a single artist synthesized from the scalar fallback
    /// credit. For the primary [`Role::Artist`] any credited remixers
    /// are appended after the base list, in order. The merged list is a
    /// fresh allocation; the record's participant lists are never
    /// touched, so concurrent resolution over the same record is safe.
    #[must_use]
    pub fn resolve_artists(&self, role: Role) -> Cow<'_, [Artist]> {
        let base = self.participants.as_ref().and_then(|p| p.get(role));
        let remixers = if role == Role::Artist {
            self.participants
                .as_ref()
                .and_then(|p| p.get(Role::Remixer))
                .filter(|remixers| !remixers.is_empty())
        } else {
            None
        };
        match (base, remixers) {
            (Some(base), None) => Cow::Borrowed(base),
            (Some(base), Some(remixers)) => {
                let mut merged = Vec::with_capacity(base.len() + remixers.len());
                merged.extend_from_slice(base);
                merged.extend_from_slice(remixers);
                Cow::Owned(merged)
            }
            (None, remixers) => {
                let mut merged = vec![self.synthesized_artist(role)];
                if let Some(remixers) = remixers {
                    merged.extend_from_slice(remixers);
                }
                Cow::Owned(merged)
            }
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum RecordInvalidity {
    Participant(ArtistInvalidity),
    Credit(CreditInvalidity),
}

impl Validate for Record {
    type Invalidity = RecordInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let mut context = ValidationContext::new();
        if let Some(participants) = &self.participants {
            context = participants
                .iter()
                .flat_map(|(_, artists)| artists)
                .fold(context, |context, artist| {
                    context.validate_with(artist, RecordInvalidity::Participant)
                });
        }
        self.credits
            .values()
            .fold(context, |context, credit| {
                context.validate_with(credit, RecordInvalidity::Credit)
            })
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
