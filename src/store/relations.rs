// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::relation::MAX_GENETIC_PARENTS;
use crate::model::{PersonId, Relation, RelationKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("unknown person {person}")]
    UnknownPerson { person: PersonId },
    #[error("person {person} already exists")]
    PersonExists { person: PersonId },
    #[error("{person} cannot be related to themselves")]
    SelfRelation { person: PersonId },
    #[error("relation {relation} already exists")]
    DuplicateEdge { relation: Relation },
    #[error("{child} already has {max} {kind} parent(s)")]
    CapacityExceeded {
        child: PersonId,
        kind: RelationKind,
        max: usize,
    },
    #[error("{person} is the tree root and cannot be removed")]
    RootRemoval { person: PersonId },
}

/// Both directions of every edge touching one person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PersonLinks {
    parents: BTreeMap<RelationKind, BTreeSet<PersonId>>,
    children: BTreeMap<RelationKind, BTreeSet<PersonId>>,
}

impl PersonLinks {
    fn is_linked(&self) -> bool {
        !self.parents.is_empty() || !self.children.is_empty()
    }
}

fn insert_link(
    side: &mut BTreeMap<RelationKind, BTreeSet<PersonId>>,
    kind: RelationKind,
    other: PersonId,
) {
    side.entry(kind).or_default().insert(other);
}

fn remove_link(
    side: &mut BTreeMap<RelationKind, BTreeSet<PersonId>>,
    kind: RelationKind,
    other: &PersonId,
) -> bool {
    let Some(set) = side.get_mut(&kind) else {
        return false;
    };
    let removed = set.remove(other);
    if set.is_empty() {
        side.remove(&kind);
    }
    removed
}

/// Typed parent/child edges with a child→parents and a parent→children index.
///
/// Every mutation goes through `add_edge`/`remove_edge`/`unregister`, which validate first
/// and then touch both indices, so a reader never sees one side without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationStore {
    links: BTreeMap<PersonId, PersonLinks>,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, person: &PersonId) -> bool {
        self.links.contains_key(person)
    }

    pub fn persons(&self) -> impl Iterator<Item = &PersonId> + '_ {
        self.links.keys()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Registers a person with no edges. Returns `false` if already registered.
    pub fn register(&mut self, person: PersonId) -> bool {
        if self.links.contains_key(&person) {
            return false;
        }
        self.links.insert(person, PersonLinks::default());
        true
    }

    /// Drops a person and every edge touching them, returning the removed edges.
    pub fn unregister(&mut self, person: &PersonId) -> Result<Vec<Relation>, StoreError> {
        let links = self
            .links
            .remove(person)
            .ok_or_else(|| StoreError::UnknownPerson { person: person.clone() })?;

        let mut removed = Vec::new();
        for (kind, parents) in links.parents {
            for parent in parents {
                if let Some(parent_links) = self.links.get_mut(&parent) {
                    remove_link(&mut parent_links.children, kind, person);
                }
                removed.push(Relation::new(parent, person.clone(), kind));
            }
        }
        for (kind, children) in links.children {
            for child in children {
                if let Some(child_links) = self.links.get_mut(&child) {
                    remove_link(&mut child_links.parents, kind, person);
                }
                removed.push(Relation::new(person.clone(), child, kind));
            }
        }
        removed.sort();
        Ok(removed)
    }

    fn links(&self, person: &PersonId) -> Result<&PersonLinks, StoreError> {
        self.links
            .get(person)
            .ok_or_else(|| StoreError::UnknownPerson { person: person.clone() })
    }

    pub fn has_edge(&self, parent: &PersonId, child: &PersonId, kind: RelationKind) -> bool {
        self.links
            .get(child)
            .and_then(|links| links.parents.get(&kind))
            .is_some_and(|parents| parents.contains(parent))
    }

    pub fn add_edge(
        &mut self,
        parent: &PersonId,
        child: &PersonId,
        kind: RelationKind,
    ) -> Result<(), StoreError> {
        self.links(parent)?;
        let child_links = self.links(child)?;
        if parent == child {
            return Err(StoreError::SelfRelation { person: parent.clone() });
        }
        if self.has_edge(parent, child, kind) {
            return Err(StoreError::DuplicateEdge {
                relation: Relation::new(parent.clone(), child.clone(), kind),
            });
        }

        let same_kind = child_links.parents.get(&kind).map_or(0, BTreeSet::len);
        if let Some(max) = kind.max_parents() {
            if same_kind >= max {
                return Err(StoreError::CapacityExceeded { child: child.clone(), kind, max });
            }
        }
        if kind.is_genetic() {
            let genetic = genetic_parents_in(child_links);
            if genetic.len() >= MAX_GENETIC_PARENTS && !genetic.contains(parent) {
                return Err(StoreError::CapacityExceeded {
                    child: child.clone(),
                    kind,
                    max: MAX_GENETIC_PARENTS,
                });
            }
        }

        // Validated above: both entries exist.
        if let Some(links) = self.links.get_mut(child) {
            insert_link(&mut links.parents, kind, parent.clone());
        }
        if let Some(links) = self.links.get_mut(parent) {
            insert_link(&mut links.children, kind, child.clone());
        }
        tracing::trace!(%parent, %child, %kind, "relation added");
        Ok(())
    }

    /// Removes one edge. Returns whether it existed.
    pub fn remove_edge(&mut self, parent: &PersonId, child: &PersonId, kind: RelationKind) -> bool {
        if !self.has_edge(parent, child, kind) {
            return false;
        }
        if let Some(links) = self.links.get_mut(child) {
            remove_link(&mut links.parents, kind, parent);
        }
        if let Some(links) = self.links.get_mut(parent) {
            remove_link(&mut links.children, kind, child);
        }
        tracing::trace!(%parent, %child, %kind, "relation removed");
        true
    }

    pub fn parents_of(
        &self,
        person: &PersonId,
        kind: RelationKind,
    ) -> Result<BTreeSet<PersonId>, StoreError> {
        Ok(self.links(person)?.parents.get(&kind).cloned().unwrap_or_default())
    }

    pub fn children_of(
        &self,
        person: &PersonId,
        kind: RelationKind,
    ) -> Result<BTreeSet<PersonId>, StoreError> {
        Ok(self.links(person)?.children.get(&kind).cloned().unwrap_or_default())
    }

    pub fn all_parents(&self, person: &PersonId) -> Result<BTreeSet<PersonId>, StoreError> {
        Ok(self.links(person)?.parents.values().flatten().cloned().collect())
    }

    pub fn all_children(&self, person: &PersonId) -> Result<BTreeSet<PersonId>, StoreError> {
        Ok(self.links(person)?.children.values().flatten().cloned().collect())
    }

    /// Parents of `person` whose kind is genetic.
    pub fn genetic_parents(&self, person: &PersonId) -> Result<BTreeSet<PersonId>, StoreError> {
        Ok(genetic_parents_in(self.links(person)?))
    }

    /// Children of `person` through a genetic kind.
    pub fn genetic_children(&self, person: &PersonId) -> Result<BTreeSet<PersonId>, StoreError> {
        Ok(self
            .links(person)?
            .children
            .iter()
            .filter(|(kind, _)| kind.is_genetic())
            .flat_map(|(_, children)| children.iter().cloned())
            .collect())
    }

    /// Per-kind parent sets of `person`, kinds in declaration order.
    pub fn parents_by_kind(
        &self,
        person: &PersonId,
    ) -> Result<BTreeMap<RelationKind, BTreeSet<PersonId>>, StoreError> {
        Ok(self.links(person)?.parents.clone())
    }

    /// Kinds linking `parent` to `child`, in declaration order.
    pub fn kinds_between(&self, parent: &PersonId, child: &PersonId) -> Vec<RelationKind> {
        self.links
            .get(child)
            .map(|links| {
                links
                    .parents
                    .iter()
                    .filter(|(_, parents)| parents.contains(parent))
                    .map(|(kind, _)| *kind)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every edge, ordered by child then kind then parent.
    pub fn edges(&self) -> impl Iterator<Item = Relation> + '_ {
        self.links.iter().flat_map(|(child, links)| {
            links.parents.iter().flat_map(move |(kind, parents)| {
                parents
                    .iter()
                    .map(move |parent| Relation::new(parent.clone(), child.clone(), *kind))
            })
        })
    }

    /// Persons that have at least one edge.
    pub fn linked_persons(&self) -> impl Iterator<Item = &PersonId> + '_ {
        self.links
            .iter()
            .filter(|(_, links)| links.is_linked())
            .map(|(person, _)| person)
    }
}

fn genetic_parents_in(links: &PersonLinks) -> BTreeSet<PersonId> {
    links
        .parents
        .iter()
        .filter(|(kind, _)| kind.is_genetic())
        .flat_map(|(_, parents)| parents.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rstest::{fixture, rstest};

    use super::{RelationStore, StoreError};
    use crate::model::{PersonId, Relation, RelationKind};

    fn pid(value: &str) -> PersonId {
        PersonId::new(value).expect("person id")
    }

    fn set(ids: &[&str]) -> BTreeSet<PersonId> {
        ids.iter().map(|id| pid(id)).collect()
    }

    #[fixture]
    fn store() -> RelationStore {
        let mut store = RelationStore::new();
        for id in ["a", "b", "c", "d", "e", "f"] {
            store.register(pid(id));
        }
        store
    }

    #[rstest]
    fn add_edge_updates_both_indices(mut store: RelationStore) {
        store
            .add_edge(&pid("b"), &pid("a"), RelationKind::BiologicalParent)
            .expect("edge");

        assert_eq!(store.parents_of(&pid("a"), RelationKind::BiologicalParent), Ok(set(&["b"])));
        assert_eq!(store.children_of(&pid("b"), RelationKind::BiologicalParent), Ok(set(&["a"])));
        assert_eq!(store.all_children(&pid("a")), Ok(BTreeSet::new()));
    }

    #[rstest]
    fn duplicate_triples_are_rejected(mut store: RelationStore) {
        store
            .add_edge(&pid("b"), &pid("a"), RelationKind::FosterParent)
            .expect("edge");
        let err = store
            .add_edge(&pid("b"), &pid("a"), RelationKind::FosterParent)
            .expect_err("duplicate");
        assert_eq!(
            err,
            StoreError::DuplicateEdge {
                relation: Relation::new(pid("b"), pid("a"), RelationKind::FosterParent),
            }
        );

        // Same pair under a different kind is a distinct relation.
        store
            .add_edge(&pid("b"), &pid("a"), RelationKind::Godparent)
            .expect("different kind");
    }

    #[rstest]
    fn self_loops_and_unknown_persons_are_rejected(mut store: RelationStore) {
        assert_eq!(
            store.add_edge(&pid("a"), &pid("a"), RelationKind::Godparent),
            Err(StoreError::SelfRelation { person: pid("a") })
        );
        assert_eq!(
            store.add_edge(&pid("zz"), &pid("a"), RelationKind::Godparent),
            Err(StoreError::UnknownPerson { person: pid("zz") })
        );
        assert_eq!(
            store.parents_of(&pid("zz"), RelationKind::Godparent),
            Err(StoreError::UnknownPerson { person: pid("zz") })
        );
    }

    #[rstest]
    #[case(RelationKind::BiologicalParent, 2)]
    #[case(RelationKind::NonBiologicalParent, 2)]
    #[case(RelationKind::SurrogateParent, 1)]
    #[case(RelationKind::EggDonor, 1)]
    fn bounded_kinds_stop_at_capacity(
        mut store: RelationStore,
        #[case] kind: RelationKind,
        #[case] max: usize,
    ) {
        let parents = ["b", "c", "d"];
        for parent in &parents[..max] {
            store.add_edge(&pid(parent), &pid("a"), kind).expect("within capacity");
        }
        let err = store
            .add_edge(&pid(parents[max]), &pid("a"), kind)
            .expect_err("over capacity");
        assert_eq!(err, StoreError::CapacityExceeded { child: pid("a"), kind, max });
        assert_eq!(store.parents_of(&pid("a"), kind).map(|p| p.len()), Ok(max));
    }

    #[rstest]
    fn unbounded_kinds_accept_many_parents(mut store: RelationStore) {
        for parent in ["b", "c", "d", "e", "f"] {
            store
                .add_edge(&pid(parent), &pid("a"), RelationKind::Godparent)
                .expect("godparent");
        }
        assert_eq!(store.parents_of(&pid("a"), RelationKind::Godparent).map(|p| p.len()), Ok(5));
    }

    #[rstest]
    fn genetic_kinds_share_a_cap_of_two(mut store: RelationStore) {
        store
            .add_edge(&pid("b"), &pid("a"), RelationKind::BiologicalParent)
            .expect("bio");
        store
            .add_edge(&pid("c"), &pid("a"), RelationKind::SpermDonor)
            .expect("donor");
        let err = store
            .add_edge(&pid("d"), &pid("a"), RelationKind::EggDonor)
            .expect_err("third genetic parent");
        assert_eq!(
            err,
            StoreError::CapacityExceeded { child: pid("a"), kind: RelationKind::EggDonor, max: 2 }
        );
        assert_eq!(store.genetic_parents(&pid("a")), Ok(set(&["b", "c"])));
    }

    #[rstest]
    fn remove_edge_clears_both_sides(mut store: RelationStore) {
        store
            .add_edge(&pid("b"), &pid("a"), RelationKind::AdoptiveParent)
            .expect("edge");
        assert!(store.remove_edge(&pid("b"), &pid("a"), RelationKind::AdoptiveParent));
        assert!(!store.remove_edge(&pid("b"), &pid("a"), RelationKind::AdoptiveParent));

        assert_eq!(store.all_parents(&pid("a")), Ok(BTreeSet::new()));
        assert_eq!(store.all_children(&pid("b")), Ok(BTreeSet::new()));
        assert_eq!(store.linked_persons().count(), 0);
    }

    #[rstest]
    fn unregister_drops_edges_on_the_other_side(mut store: RelationStore) {
        store
            .add_edge(&pid("b"), &pid("a"), RelationKind::BiologicalParent)
            .expect("edge");
        store
            .add_edge(&pid("a"), &pid("c"), RelationKind::Godparent)
            .expect("edge");

        let removed = store.unregister(&pid("a")).expect("unregister");
        assert_eq!(removed.len(), 2);
        assert!(!store.contains(&pid("a")));
        assert_eq!(store.all_children(&pid("b")), Ok(BTreeSet::new()));
        assert_eq!(store.all_parents(&pid("c")), Ok(BTreeSet::new()));
        assert_eq!(store.edges().count(), 0);
    }

    #[rstest]
    fn returned_sets_are_copies(mut store: RelationStore) {
        store
            .add_edge(&pid("b"), &pid("a"), RelationKind::BiologicalParent)
            .expect("edge");
        let mut parents = store.all_parents(&pid("a")).expect("parents");
        parents.insert(pid("zz"));
        assert_eq!(store.all_parents(&pid("a")), Ok(set(&["b"])));
    }
}
