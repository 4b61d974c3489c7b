// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Neighbourhood layout around one focus person.
//!
//! One call expands the ancestors breadth-first, places them on a balanced binary grid,
//! then adds siblings, partner unions with their children and non-genetic parent lanes,
//! and finally normalises all geometry to the configured margin. No state survives a
//! call; identical inputs give identical output.

pub mod ancestors;
pub mod config;
mod family;
pub mod geometry;
pub mod neighborhood;
mod secondary;

pub use ancestors::AncestorLevels;
pub use config::{ConfigError, LayoutConfig, DEFAULT_MAX_DEPTH, DEPTH_RANGE, MAX_DEPTH, MIN_DEPTH};
pub use geometry::{EdgeSegment, LayoutResult, NodeRole, PlacedNode, Point};
pub use neighborhood::{layout_neighborhood, layout_with_resolver, LayoutError};
