// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use artist_credit_core::Artist;

/// Capability for rendering the pieces of an artist credit.
///
/// Implementations produce the UI framework's node type. An artist
/// link is expected to navigate to the artist's detail view on
/// activation and to stop click-event propagation, so that a link
/// inside a larger clickable row does not trigger the row's own click
/// action. Both concerns live entirely in the implementation.
pub trait RenderLink {
    type Node;

    /// Renders one artist as a navigable link.
    fn artist_link(&self, artist: &Artist, class_name: &str) -> Self::Node;

    /// Renders a literal text span.
    fn text(&self, text: &str) -> Self::Node;

    /// Renders the delimiter between artists of a compact summary.
    fn separator(&self) -> Self::Node;
}
