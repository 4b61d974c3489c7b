// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use crate::model::{FamilyDirectory, FamilyTree, PersonId, PersonSortKey};
use crate::store::{RelationStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown person {person}")]
    UnknownPerson { person: PersonId },
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for QueryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownPerson { person } => Self::UnknownPerson { person },
            other => Self::Store(other),
        }
    }
}

/// Stateless view over a relation store and the directory that labels and dates persons.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    relations: &'a RelationStore,
    directory: &'a dyn FamilyDirectory,
}

impl<'a> Resolver<'a> {
    pub fn new(tree: &'a FamilyTree) -> Self {
        Self {
            relations: tree.relations(),
            directory: tree,
        }
    }

    pub fn with_directory(relations: &'a RelationStore, directory: &'a dyn FamilyDirectory) -> Self {
        Self {
            relations,
            directory,
        }
    }

    pub fn relations(&self) -> &'a RelationStore {
        self.relations
    }

    pub fn directory(&self) -> &'a dyn FamilyDirectory {
        self.directory
    }

    pub fn contains(&self, person: &PersonId) -> bool {
        self.relations.contains(person)
    }

    pub(crate) fn require(&self, person: &PersonId) -> Result<(), QueryError> {
        if self.relations.contains(person) {
            Ok(())
        } else {
            Err(QueryError::UnknownPerson {
                person: person.clone(),
            })
        }
    }

    pub fn sort_key<'k>(&self, person: &'k PersonId) -> PersonSortKey<'k>
    where
        'a: 'k,
    {
        self.directory.sort_key(person)
    }

    /// Canonical person order: birth key, then label, then id.
    pub fn compare(&self, a: &PersonId, b: &PersonId) -> Ordering {
        self.directory.sort_key(a).cmp(&self.directory.sort_key(b))
    }

    pub fn sort_persons(&self, persons: impl IntoIterator<Item = PersonId>) -> Vec<PersonId> {
        let mut persons = persons.into_iter().collect::<Vec<_>>();
        persons.sort_by(|a, b| self.compare(a, b));
        persons
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("persons", &self.relations.len())
            .finish_non_exhaustive()
    }
}
