// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;
use crate::artist::Artist;

fn reassemble(segments: &[Segment<'_>]) -> String {
    segments.iter().map(Segment::as_str).collect()
}

#[test]
fn featured_artists() {
    let artists = [Artist::new("al-1", "A"), Artist::new("al-2", "B")];
    let segments = segment_display("A feat. B", &artists);
    assert_eq!(
        vec![
            Segment::Artist(&artists[0]),
            Segment::Text(" feat. "),
            Segment::Artist(&artists[1]),
        ],
        segments
    );
}

#[test]
fn unmatched_artist_yields_single_text_span() {
    let artists = [Artist::new("al-1", "Q")];
    assert_eq!(
        vec![Segment::Text("Unknown Artist")],
        segment_display("Unknown Artist", &artists)
    );
}

#[test]
fn partition_reassembles_display_string() {
    let artists = [
        Artist::new("al-1", "Madonna"),
        Artist::new("al-2", "M.I.A."),
        Artist::new("al-3", "Nicki Minaj"),
        Artist::new("al-4", "Missing"),
    ];
    for display in [
        "Madonna feat. M.I.A. and Nicki Minaj",
        "Madonna feat. M.I.A. and Nicki Minaj (remastered)",
        "Intro by Madonna",
        "Nobody credited here",
        "MadonnaM.I.A.Nicki Minaj",
        "",
    ] {
        let segments = segment_display(display, &artists);
        assert_eq!(display, reassemble(&segments));
    }
}

#[test]
fn forward_only_scan_skips_earlier_occurrences() {
    // "B" precedes "A" in the display string, but the artist list
    // leads with A. After A matches, B's only occurrence lies before
    // the cursor and is skipped rather than matched out of order.
    let artists = [Artist::new("al-1", "A"), Artist::new("al-2", "B")];
    let display = "B then A";
    let segments = segment_display(display, &artists);
    assert_eq!(
        vec![Segment::Text("B then "), Segment::Artist(&artists[0])],
        segments
    );
    assert_eq!(display, reassemble(&segments));
}

#[test]
fn duplicate_names_match_successive_occurrences() {
    let artists = [
        Artist::new("al-1", "Prince"),
        Artist::new("al-2", "Prince"),
    ];
    let segments = segment_display("Prince vs. Prince", &artists);
    assert_eq!(
        vec![
            Segment::Artist(&artists[0]),
            Segment::Text(" vs. "),
            Segment::Artist(&artists[1]),
        ],
        segments
    );
}

#[test]
fn duplicate_name_without_second_occurrence_is_skipped() {
    let artists = [
        Artist::new("al-1", "Prince"),
        Artist::new("al-2", "Prince"),
    ];
    let segments = segment_display("Prince", &artists);
    assert_eq!(vec![Segment::Artist(&artists[0])], segments);
}

#[test]
fn fully_consumed_display_string_has_no_trailing_span() {
    let artists = [Artist::new("al-1", "ABBA")];
    assert_eq!(
        vec![Segment::Artist(&artists[0])],
        segment_display("ABBA", &artists)
    );
}

#[test]
fn empty_display_string() {
    let artists = [Artist::new("al-1", "ABBA")];
    assert_eq!(Vec::<Segment<'_>>::new(), segment_display("", &artists));
}

#[test]
fn empty_artist_name_is_not_found() {
    let artists = [Artist::new("al-1", ""), Artist::new("al-2", "ABBA")];
    assert_eq!(
        vec![Segment::Text("by "), Segment::Artist(&artists[1])],
        segment_display("by ABBA", &artists)
    );
}

#[test]
fn matching_is_case_sensitive() {
    let artists = [Artist::new("al-1", "abba")];
    assert_eq!(
        vec![Segment::Text("ABBA")],
        segment_display("ABBA", &artists)
    );
}

#[test]
fn multi_byte_names_and_separators() {
    let artists = [
        Artist::new("al-1", "Björk"),
        Artist::new("al-2", "Sigur Rós"),
    ];
    let display = "Björk × Sigur Rós";
    let segments = segment_display(display, &artists);
    assert_eq!(
        vec![
            Segment::Artist(&artists[0]),
            Segment::Text(" × "),
            Segment::Artist(&artists[1]),
        ],
        segments
    );
    assert_eq!(display, reassemble(&segments));
}
