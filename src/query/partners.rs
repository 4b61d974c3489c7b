// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use super::resolver::{QueryError, Resolver};
use crate::model::PersonId;

/// One union of the query person: the partner (if known) and the children they share.
///
/// A declared partner-only union has an empty `children` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerGroup {
    pub partner: Option<PersonId>,
    pub children: Vec<PersonId>,
}

impl PartnerGroup {
    /// The person a group is ordered by: the partner, or else the youngest child.
    fn anchor(&self) -> Option<&PersonId> {
        self.partner.as_ref().or_else(|| self.children.last())
    }
}

impl Resolver<'_> {
    /// The other parent of `child` in the union it came from with `person`.
    ///
    /// This is the child's other genetic parent whatever kind links `person` to the child,
    /// so a step-parent pairs with the biological parent. Only a child without another
    /// genetic parent falls back to the first other parent of a kind shared with `person`
    /// (e.g. the second adoptive parent).
    pub fn co_parent_of(
        &self,
        person: &PersonId,
        child: &PersonId,
    ) -> Result<Option<PersonId>, QueryError> {
        self.require(person)?;
        self.require(child)?;

        let genetic = self
            .genetic_parents(child)?
            .into_iter()
            .filter(|parent| parent != person);
        if let Some(first) = self.sort_persons(genetic).into_iter().next() {
            return Ok(Some(first));
        }

        for kind in self.relations().kinds_between(person, child) {
            let others = self
                .parents_of(child, kind)?
                .into_iter()
                .filter(|parent| parent != person);
            if let Some(first) = self.sort_persons(others).into_iter().next() {
                return Ok(Some(first));
            }
        }
        Ok(None)
    }

    /// Co-parents of any child plus declared partner-only unions.
    pub fn partners_of(&self, person: &PersonId) -> Result<BTreeSet<PersonId>, QueryError> {
        self.require(person)?;
        let mut partners = BTreeSet::new();
        for child in self.all_children(person)? {
            if let Some(other) = self.co_parent_of(person, &child)? {
                partners.insert(other);
            }
        }
        partners.extend(
            self.directory()
                .partner_unions_of(person)
                .into_iter()
                .filter(|partner| partner != person),
        );
        Ok(partners)
    }

    /// Children of `person` grouped by co-parent, plus childless declared unions.
    ///
    /// Groups are ordered by their partner, or by their youngest child when there is no
    /// partner, using the canonical person order. Children are oldest first.
    pub fn partners_and_children(&self, person: &PersonId) -> Result<Vec<PartnerGroup>, QueryError> {
        self.require(person)?;

        let mut by_partner = BTreeMap::<Option<PersonId>, BTreeSet<PersonId>>::new();
        for child in self.all_children(person)? {
            let co_parent = self.co_parent_of(person, &child)?;
            by_partner.entry(co_parent).or_default().insert(child);
        }
        for partner in self.directory().partner_unions_of(person) {
            if &partner != person {
                by_partner.entry(Some(partner)).or_default();
            }
        }

        let mut groups = by_partner
            .into_iter()
            .map(|(partner, children)| PartnerGroup {
                partner,
                children: self.sort_persons(children),
            })
            .collect::<Vec<_>>();
        groups.sort_by(|a, b| self.compare_groups(a, b));
        Ok(groups)
    }

    fn compare_groups(&self, a: &PartnerGroup, b: &PartnerGroup) -> Ordering {
        let by_anchor = match (a.anchor(), b.anchor()) {
            (Some(x), Some(y)) => self.compare(x, y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_anchor
            .then_with(|| a.partner.is_none().cmp(&b.partner.is_none()))
            .then_with(|| a.children.cmp(&b.children))
    }
}
