// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Accessors the engine consumes from collaborators it does not own.
//!
//! Birth keys come from the calendar subsystem and partner-only unions from life-event
//! records. `FamilyTree` implements all of them from its own records; other backends can
//! implement them directly.

use std::collections::BTreeSet;

use super::ids::PersonId;
use super::person::{ChronoKey, PersonSortKey};

pub trait BirthKeys {
    fn birth_key(&self, person: &PersonId) -> Option<ChronoKey>;
}

pub trait PartnerUnions {
    /// Persons declared as partners of `person`, independent of shared children.
    fn partner_unions_of(&self, person: &PersonId) -> BTreeSet<PersonId>;
}

pub trait FamilyDirectory: BirthKeys + PartnerUnions {
    fn contains(&self, person: &PersonId) -> bool;

    /// Display label; unknown persons yield an empty label.
    fn label(&self, person: &PersonId) -> &str;

    fn sort_key<'a>(&'a self, person: &'a PersonId) -> PersonSortKey<'a> {
        PersonSortKey {
            birth_key: self.birth_key(person),
            label: self.label(person),
            id: person,
        }
    }
}
