// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;
use crate::artist::Artist;

#[test]
fn dedup_and_cap() {
    let artists = [
        Artist::new("al-1", "X"),
        Artist::new("al-1", "X"),
        Artist::new("al-2", "Y"),
        Artist::new("al-3", "Z"),
        Artist::new("al-4", "W"),
    ];
    // The second X is dropped by dedup, W by the cap.
    assert_eq!(
        vec![
            SummaryItem::Artist(&artists[0]),
            SummaryItem::Separator,
            SummaryItem::Artist(&artists[2]),
            SummaryItem::Separator,
            SummaryItem::Artist(&artists[3]),
        ],
        summarize(&artists)
    );
}

#[test]
fn dedup_is_by_id_not_by_name() {
    let artists = [Artist::new("al-1", "Unknown"), Artist::new("al-2", "Unknown")];
    assert_eq!(
        vec![
            SummaryItem::Artist(&artists[0]),
            SummaryItem::Separator,
            SummaryItem::Artist(&artists[1]),
        ],
        summarize(&artists)
    );
}

#[test]
fn single_artist_has_no_separator() {
    let artists = [Artist::new("al-1", "Madonna")];
    assert_eq!(vec![SummaryItem::Artist(&artists[0])], summarize(&artists));
}

#[test]
fn empty_list() {
    assert_eq!(Vec::<SummaryItem<'_>>::new(), summarize(&[]));
}

#[test]
fn separator_count_and_placement() {
    let artists: Vec<_> = (1..=5)
        .map(|i| Artist::new(format!("al-{i}").as_str(), format!("Artist {i}")))
        .collect();
    let summary = summarize(&artists);
    let artist_count = summary
        .iter()
        .filter(|item| matches!(item, SummaryItem::Artist(_)))
        .count();
    let separator_count = summary.len() - artist_count;
    assert_eq!(MAX_SUMMARY_ARTISTS, artist_count);
    assert_eq!(artist_count - 1, separator_count);
    // Separators sit strictly between artists.
    for (index, item) in summary.iter().enumerate() {
        if index % 2 == 0 {
            assert!(matches!(item, SummaryItem::Artist(_)));
        } else {
            assert_eq!(&SummaryItem::Separator, item);
        }
    }
}

#[test]
fn summary_text() {
    let artists = [Artist::new("al-1", "A"), Artist::new("al-2", "B")];
    let text: String = summarize(&artists)
        .iter()
        .map(SummaryItem::as_str)
        .collect();
    assert_eq!("A \u{2022} B", text);
}
