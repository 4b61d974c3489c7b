// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use super::resolver::{QueryError, Resolver};
use crate::model::PersonId;

/// Unordered pair of genetic parents; present ids first, then by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParentPair {
    first: Option<PersonId>,
    second: Option<PersonId>,
}

impl ParentPair {
    pub fn new(a: Option<PersonId>, b: Option<PersonId>) -> Self {
        match (a, b) {
            (Some(a), Some(b)) if b < a => Self { first: Some(b), second: Some(a) },
            (None, Some(b)) => Self { first: Some(b), second: None },
            (a, b) => Self { first: a, second: b },
        }
    }

    fn from_set(parents: &BTreeSet<PersonId>) -> Self {
        let mut iter = parents.iter().cloned();
        Self::new(iter.next(), iter.next())
    }

    pub fn first(&self) -> Option<&PersonId> {
        self.first.as_ref()
    }

    pub fn second(&self) -> Option<&PersonId> {
        self.second.as_ref()
    }

    pub fn contains(&self, person: &PersonId) -> bool {
        self.first.as_ref() == Some(person) || self.second.as_ref() == Some(person)
    }
}

/// Siblings sharing exactly one genetic parent pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingGroup {
    pub parents: ParentPair,
    pub siblings: Vec<PersonId>,
}

impl Resolver<'_> {
    /// Persons whose genetic-parent set equals `person`'s non-empty set.
    pub fn same_parents_siblings(
        &self,
        person: &PersonId,
    ) -> Result<BTreeSet<PersonId>, QueryError> {
        let parents = self.genetic_parents(person)?;
        let mut siblings = BTreeSet::new();
        if parents.is_empty() {
            return Ok(siblings);
        }

        for candidate in self.genetic_children_of_all(&parents)? {
            if &candidate == person {
                continue;
            }
            if self.genetic_parents(&candidate)? == parents {
                siblings.insert(candidate);
            }
        }
        Ok(siblings)
    }

    /// Everyone sharing at least one genetic parent with `person`, grouped by their parent
    /// pair. Groups are ordered by their oldest member; `person` itself is excluded.
    pub fn all_siblings(&self, person: &PersonId) -> Result<Vec<SiblingGroup>, QueryError> {
        let parents = self.genetic_parents(person)?;
        let mut groups = BTreeMap::<ParentPair, BTreeSet<PersonId>>::new();

        for candidate in self.genetic_children_of_all(&parents)? {
            if &candidate == person {
                continue;
            }
            let pair = ParentPair::from_set(&self.genetic_parents(&candidate)?);
            groups.entry(pair).or_default().insert(candidate);
        }

        let mut groups = groups
            .into_iter()
            .map(|(parents, siblings)| SiblingGroup {
                parents,
                siblings: self.sort_persons(siblings),
            })
            .collect::<Vec<_>>();
        groups.sort_by(|a, b| {
            // Groups are never empty: each was created by inserting a member.
            let by_oldest = match (a.siblings.first(), b.siblings.first()) {
                (Some(x), Some(y)) => self.compare(x, y),
                _ => a.siblings.len().cmp(&b.siblings.len()),
            };
            by_oldest.then_with(|| a.parents.cmp(&b.parents))
        });
        Ok(groups)
    }

    fn genetic_children_of_all(
        &self,
        parents: &BTreeSet<PersonId>,
    ) -> Result<BTreeSet<PersonId>, QueryError> {
        let mut children = BTreeSet::new();
        for parent in parents {
            children.extend(self.relations().genetic_children(parent)?);
        }
        Ok(children)
    }
}
