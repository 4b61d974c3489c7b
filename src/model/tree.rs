// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use super::directory::{BirthKeys, FamilyDirectory, PartnerUnions};
use super::ids::PersonId;
use super::person::{ChronoKey, Person};
use super::relation::{Relation, RelationKind};
use crate::store::{RelationStore, StoreError};

/// Unordered pair of declared partners, stored smaller id first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartnerUnion {
    first: PersonId,
    second: PersonId,
}

impl PartnerUnion {
    pub fn new(a: PersonId, b: PersonId) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> &PersonId {
        &self.first
    }

    pub fn second(&self) -> &PersonId {
        &self.second
    }

    pub fn involves(&self, person: &PersonId) -> bool {
        &self.first == person || &self.second == person
    }

    pub fn other(&self, person: &PersonId) -> Option<&PersonId> {
        if &self.first == person {
            Some(&self.second)
        } else if &self.second == person {
            Some(&self.first)
        } else {
            None
        }
    }
}

/// Everything removed together with a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedPerson {
    pub person: Person,
    pub relations: Vec<Relation>,
    pub unions: Vec<PartnerUnion>,
}

/// The person set, their relations and declared unions, plus the fallback focus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FamilyTree {
    people: BTreeMap<PersonId, Person>,
    relations: RelationStore,
    unions: BTreeSet<PartnerUnion>,
    root: Option<PersonId>,
    rev: u64,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &BTreeMap<PersonId, Person> {
        &self.people
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn relations(&self) -> &RelationStore {
        &self.relations
    }

    pub fn unions(&self) -> &BTreeSet<PartnerUnion> {
        &self.unions
    }

    /// Bumped once per successfully applied edit batch.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub(crate) fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    pub fn root(&self) -> Option<&PersonId> {
        self.root.as_ref()
    }

    pub fn set_root(&mut self, root: Option<PersonId>) -> Result<(), StoreError> {
        if let Some(id) = &root {
            self.require(id)?;
        }
        self.root = root;
        Ok(())
    }

    fn require(&self, id: &PersonId) -> Result<(), StoreError> {
        if self.people.contains_key(id) {
            Ok(())
        } else {
            Err(StoreError::UnknownPerson { person: id.clone() })
        }
    }

    pub fn add_person(&mut self, id: PersonId, person: Person) -> Result<(), StoreError> {
        if self.people.contains_key(&id) {
            return Err(StoreError::PersonExists { person: id });
        }
        self.relations.register(id.clone());
        self.people.insert(id, person);
        Ok(())
    }

    pub fn remove_person(&mut self, id: &PersonId) -> Result<RemovedPerson, StoreError> {
        self.require(id)?;
        if self.root.as_ref() == Some(id) {
            return Err(StoreError::RootRemoval { person: id.clone() });
        }

        let relations = self.relations.unregister(id)?;
        let unions = self
            .unions
            .iter()
            .filter(|union| union.involves(id))
            .cloned()
            .collect::<Vec<_>>();
        for union in &unions {
            self.unions.remove(union);
        }
        let person = self
            .people
            .remove(id)
            .ok_or_else(|| StoreError::UnknownPerson { person: id.clone() })?;

        Ok(RemovedPerson { person, relations, unions })
    }

    pub fn set_label(&mut self, id: &PersonId, label: &str) -> Result<(), StoreError> {
        let person = self
            .people
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownPerson { person: id.clone() })?;
        person.set_label(label);
        Ok(())
    }

    pub fn set_birth_key(
        &mut self,
        id: &PersonId,
        birth_key: Option<ChronoKey>,
    ) -> Result<(), StoreError> {
        let person = self
            .people
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownPerson { person: id.clone() })?;
        person.set_birth_key(birth_key);
        Ok(())
    }

    pub fn add_relation(
        &mut self,
        parent: &PersonId,
        child: &PersonId,
        kind: RelationKind,
    ) -> Result<(), StoreError> {
        self.relations.add_edge(parent, child, kind)
    }

    pub fn remove_relation(&mut self, parent: &PersonId, child: &PersonId, kind: RelationKind) -> bool {
        self.relations.remove_edge(parent, child, kind)
    }

    /// Declares a partner-only union. Returns `false` if it was already declared.
    pub fn declare_partners(&mut self, a: &PersonId, b: &PersonId) -> Result<bool, StoreError> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Err(StoreError::SelfRelation { person: a.clone() });
        }
        Ok(self.unions.insert(PartnerUnion::new(a.clone(), b.clone())))
    }

    pub fn dissolve_partners(&mut self, a: &PersonId, b: &PersonId) -> bool {
        self.unions.remove(&PartnerUnion::new(a.clone(), b.clone()))
    }
}

impl BirthKeys for FamilyTree {
    fn birth_key(&self, person: &PersonId) -> Option<ChronoKey> {
        self.people.get(person).and_then(Person::birth_key)
    }
}

impl PartnerUnions for FamilyTree {
    fn partner_unions_of(&self, person: &PersonId) -> BTreeSet<PersonId> {
        self.unions
            .iter()
            .filter_map(|union| union.other(person).cloned())
            .collect()
    }
}

impl FamilyDirectory for FamilyTree {
    fn contains(&self, person: &PersonId) -> bool {
        self.people.contains_key(person)
    }

    fn label(&self, person: &PersonId) -> &str {
        self.people.get(person).map_or("", Person::label)
    }
}
