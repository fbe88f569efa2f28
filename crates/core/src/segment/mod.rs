// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::artist::Artist;

///////////////////////////////////////////////////////////////////////
// Segment
///////////////////////////////////////////////////////////////////////

/// One span of a segmented display string.
///
/// Concatenating the spans of a segmentation in order, with each
/// artist span contributing the matched substring (which equals the
/// artist's name by exact matching), reproduces the display string
/// without gaps or overlaps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Artist(&'a Artist),
}

impl<'a> Segment<'a> {
    /// The literal text this span contributes to the display string.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Text(text) => text,
            Self::Artist(artist) => artist.name.as_str(),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Segmentation
///////////////////////////////////////////////////////////////////////

/// Partitions a display string into literal text and artist spans.
///
/// Single forward scan: for each artist, in list order, the first
/// exact occurrence of its name at or after the cursor becomes an
/// artist span and advances the cursor past the match. Artists whose
/// names are not found from the cursor onwards are skipped silently.
///
/// Skipping is order-dependent: an artist whose name occurs only
/// *before* the position reached by an earlier match is dropped, not
/// matched out of order. Credited names are expected to appear in list
/// order within the display string.
// TODO: The order-dependent skipping silently drops artists when the
// display string lists them in a different order than the credits.
// Needs a product decision whether that case should link out of order.
#[must_use]
pub fn segment_display<'a>(display: &'a str, artists: &'a [Artist]) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for artist in artists {
        // `str::find` would report a zero-width match for an empty
        // needle, which must count as "not found" here.
        if artist.name.is_empty() {
            continue;
        }
        let Some(offset) = display[cursor..].find(artist.name.as_str()) else {
            continue;
        };
        let start = cursor + offset;
        if start > cursor {
            segments.push(Segment::Text(&display[cursor..start]));
        }
        segments.push(Segment::Artist(artist));
        cursor = start + artist.name.len();
    }
    if cursor < display.len() {
        segments.push(Segment::Text(&display[cursor..]));
    }
    segments
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
