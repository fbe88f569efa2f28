// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use artist_credit_core::ArtistId;

///////////////////////////////////////////////////////////////////////
// LayoutWidth
///////////////////////////////////////////////////////////////////////

/// Responsive layout-width classification of the embedding UI.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LayoutWidth {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl LayoutWidth {
    #[must_use]
    pub fn is_desktop(self) -> bool {
        self >= Self::Md
    }
}

///////////////////////////////////////////////////////////////////////
// Route strategy
///////////////////////////////////////////////////////////////////////

/// The width-dependent navigation strategy for artist links.
///
/// Returns the function that maps an artist id to its navigation
/// target: the artist detail view on desktop widths, the album list
/// filtered by artist on narrow screens where no detail view exists.
/// [`RenderLink`](crate::RenderLink) implementations consume this;
/// the credit resolution and segmentation core never routes.
pub fn artist_route(width: LayoutWidth) -> impl Fn(&ArtistId) -> String {
    move |artist_id| {
        if width.is_desktop() {
            format!("/artist/{artist_id}/show")
        } else {
            format!("/album?filter={{\"artist_id\":\"{artist_id}\"}}")
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
