// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Attributes a media record (track or album) to one or more artists
//! and prepares each artist's name for rendering as a link to the
//! artist's detail view, handling compound display strings like
//! `"A feat. B"`, role-based credit lists, remixer merging,
//! deduplication, and compact multi-artist summaries.
//!
//! Facade that re-exports the sub-crates.

pub use artist_credit_core as core;
pub use artist_credit_render as render;
