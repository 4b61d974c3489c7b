// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kindred: family relationship resolution and focus-centred tree layout.
//!
//! A [`model::FamilyTree`] holds persons, typed parent→child relations and partner-only
//! unions. The [`query::Resolver`] derives parents, siblings and partner groups from a
//! snapshot, and [`layout::layout_neighborhood`] turns the neighbourhood of one focus
//! person into positioned cards and axis-aligned connector segments. Rendering is left
//! to the caller, which consumes the serialisable [`layout::LayoutResult`].

pub mod engine;
pub mod format;
pub mod layout;
pub mod logging;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;

pub use engine::FamilyEngine;
