// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A family tree is a set of persons plus typed parent→child relations and declared
//! partner-only unions. Dates are consumed only as opaque chronological keys.

pub mod directory;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod person;
pub mod relation;
pub mod tree;

pub use directory::{BirthKeys, FamilyDirectory, PartnerUnions};
pub use ids::{Id, IdError, PersonId};
pub use person::{ChronoKey, Person, PersonSortKey};
pub use relation::{KindSide, ParseRelationKindError, Relation, RelationKind};
pub use tree::{FamilyTree, PartnerUnion, RemovedPerson};
