// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Maps resolved artist credits onto renderable UI nodes.
//!
//! The core crate only produces abstract segment and summary values.
//! This crate turns them into whatever node type the embedding UI
//! framework uses, through the [`RenderLink`] capability. Navigation
//! targets and click handling stay behind that trait; the adapter
//! itself has no framework dependency and is testable with a plain
//! string renderer.

pub mod link;
pub use self::link::RenderLink;

pub mod route;
pub use self::route::{LayoutWidth, artist_route};

mod field;
pub use self::field::artist_link_field;
