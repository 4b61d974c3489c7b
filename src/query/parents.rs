// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use super::resolver::{QueryError, Resolver};
use crate::model::{PersonId, RelationKind};

/// Parents of one non-genetic kind, in canonical person order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindParents {
    pub kind: RelationKind,
    pub parents: Vec<PersonId>,
}

impl Resolver<'_> {
    pub fn parents_of(
        &self,
        person: &PersonId,
        kind: RelationKind,
    ) -> Result<BTreeSet<PersonId>, QueryError> {
        Ok(self.relations().parents_of(person, kind)?)
    }

    pub fn all_parents(&self, person: &PersonId) -> Result<BTreeSet<PersonId>, QueryError> {
        Ok(self.relations().all_parents(person)?)
    }

    pub fn all_children(&self, person: &PersonId) -> Result<BTreeSet<PersonId>, QueryError> {
        Ok(self.relations().all_children(person)?)
    }

    /// Biological parents plus egg/sperm donors. At most two by store capacity.
    pub fn genetic_parents(&self, person: &PersonId) -> Result<BTreeSet<PersonId>, QueryError> {
        Ok(self.relations().genetic_parents(person)?)
    }

    /// The genetic parents as two slots in canonical order; missing slots are `None`.
    pub fn ordered_genetic_parents(
        &self,
        person: &PersonId,
    ) -> Result<[Option<PersonId>; 2], QueryError> {
        let mut parents = self
            .genetic_parents(person)?
            .into_iter()
            .collect::<SmallVec<[PersonId; 2]>>();
        parents.sort_by(|a, b| self.compare(a, b));

        let mut slots = parents.into_iter();
        Ok([slots.next(), slots.next()])
    }

    /// The genetic kind through which `parent` is a parent of `child`, if any.
    pub fn genetic_parent_kind(
        &self,
        child: &PersonId,
        parent: &PersonId,
    ) -> Result<Option<RelationKind>, QueryError> {
        self.require(child)?;
        self.require(parent)?;
        Ok(self
            .relations()
            .kinds_between(parent, child)
            .into_iter()
            .find(|kind| kind.is_genetic()))
    }

    /// Non-genetic parents grouped by kind; kinds with no parents are omitted.
    pub fn secondary_parents(&self, person: &PersonId) -> Result<Vec<KindParents>, QueryError> {
        Ok(self
            .relations()
            .parents_by_kind(person)?
            .into_iter()
            .filter(|(kind, parents)| !kind.is_genetic() && !parents.is_empty())
            .map(|(kind, parents)| KindParents {
                kind,
                parents: self.sort_persons(parents),
            })
            .collect())
    }
}
