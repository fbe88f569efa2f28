// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use artist_credit_core::{
    Record, Role, Segment, SummaryItem, prelude::*, segment_display, summarize,
};

use crate::link::RenderLink;

/// Renders the artist credit of a record as a sequence of UI nodes.
///
/// The role is parsed case-insensitively from `source`. For the album
/// artist role the record's raw display string is segmented and every
/// matched artist becomes a link inside the surrounding text. For all
/// other roles a compact, deduplicated summary of at most three
/// artists is rendered, delimited by separators.
///
/// Never fails. Unknown sources and missing credits degrade to empty
/// or blank output; invalid credits are only reported through the
/// `log` facade.
pub fn artist_link_field<R>(
    record: &Record,
    class_name: &str,
    source: &str,
    renderer: &R,
) -> Vec<R::Node>
where
    R: RenderLink,
{
    let Some(role) = Role::from_source(source) else {
        log::debug!("Ignoring unknown artist credit source: {source:?}");
        return Vec::new();
    };
    if let Err(err) = record.validate() {
        log::debug!("Rendering record with invalid artist credits: {err:?}");
    }
    let artists = record.resolve_artists(role);
    if role == Role::AlbumArtist {
        let display = record.display_name(role);
        segment_display(display, &artists)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => renderer.text(text),
                Segment::Artist(artist) => renderer.artist_link(artist, class_name),
            })
            .collect()
    } else {
        summarize(&artists)
            .into_iter()
            .map(|item| match item {
                SummaryItem::Artist(artist) => renderer.artist_link(artist, class_name),
                SummaryItem::Separator => renderer.separator(),
            })
            .collect()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
