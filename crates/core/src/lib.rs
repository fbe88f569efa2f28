// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Core domain model for attributing media records (tracks and albums)
//! to artists: role-based artist resolution, display-string segmentation
//! into text/artist spans, and compact multi-artist summaries.
//!
//! This crate is purely computational. It performs no I/O, installs no
//! logger, and never mutates its inputs. Rendering artist references as
//! navigable UI elements is the concern of `artist-credit-render`.

pub mod artist;
pub use self::artist::{Artist, ArtistId, Role};

pub mod record;
pub use self::record::{Credit, Participants, Record};

pub mod segment;
pub use self::segment::{Segment, segment_display};

pub mod summary;
pub use self::summary::{MAX_SUMMARY_ARTISTS, SUMMARY_SEPARATOR, SummaryItem, summarize};

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IntoValidated as _, IsValid, Validate as _, ValidatedFrom as _};
}
