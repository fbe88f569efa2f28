// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use hashbrown::HashSet;

use crate::artist::Artist;

/// Upper bound on the number of artists shown in a compact summary.
pub const MAX_SUMMARY_ARTISTS: usize = 3;

/// Delimiter rendered between artists in a compact summary.
pub const SUMMARY_SEPARATOR: &str = " \u{2022} ";

///////////////////////////////////////////////////////////////////////
// SummaryItem
///////////////////////////////////////////////////////////////////////

/// One item of a compact multi-artist summary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SummaryItem<'a> {
    Artist(&'a Artist),
    Separator,
}

impl SummaryItem<'_> {
    /// The plain text this item contributes to the summary.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Artist(artist) => artist.name.as_str(),
            Self::Separator => SUMMARY_SEPARATOR,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Summarization
///////////////////////////////////////////////////////////////////////

/// Builds the compact summary of an artist list.
///
/// Deduplicates by artist id while preserving first-seen order, caps
/// the result at [`MAX_SUMMARY_ARTISTS`] entries, and intersperses a
/// [`SummaryItem::Separator`] between consecutive artists, i.e. `n`
/// accepted artists yield `n - 1` separators. The seen-set is scoped
/// to this call; nothing persists across invocations.
#[must_use]
pub fn summarize(artists: &[Artist]) -> Vec<SummaryItem<'_>> {
    let mut seen = HashSet::with_capacity(MAX_SUMMARY_ARTISTS);
    let accepted = artists
        .iter()
        .filter(move |artist| seen.insert(&artist.id))
        .take(MAX_SUMMARY_ARTISTS)
        .map(SummaryItem::Artist);
    itertools::intersperse(accepted, SummaryItem::Separator).collect()
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
