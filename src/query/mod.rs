// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only relationship queries.
//!
//! The resolver derives parents, siblings, partner groups and the hidden-relatives
//! predicate from a relation store snapshot. It holds no mutable state; every answer is
//! recomputed from the borrowed snapshot and ordered with an explicit total order.

pub mod hidden;
pub mod parents;
pub mod partners;
pub mod resolver;
pub mod siblings;

pub use hidden::HiddenRelatives;
pub use partners::PartnerGroup;
pub use resolver::{QueryError, Resolver};
pub use siblings::{ParentPair, SiblingGroup};
