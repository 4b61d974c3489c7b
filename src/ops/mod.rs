// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Edit operations for family trees.
//!
//! A batch is applied with optimistic concurrency (revision check) against a private copy of
//! the tree and swapped in only if every op succeeds. The resulting delta lists the persons
//! and relations that changed so callers can refresh derived state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{ChronoKey, FamilyTree, Person, PersonId, Relation, RelationKind};
use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TreeOp {
    AddPerson {
        id: PersonId,
        label: String,
        #[serde(default)]
        birth_key: Option<ChronoKey>,
    },
    RemovePerson {
        id: PersonId,
    },
    SetLabel {
        id: PersonId,
        label: String,
    },
    SetBirthKey {
        id: PersonId,
        birth_key: Option<ChronoKey>,
    },
    AddRelation {
        parent: PersonId,
        child: PersonId,
        kind: RelationKind,
    },
    RemoveRelation {
        parent: PersonId,
        child: PersonId,
        kind: RelationKind,
    },
    DeclarePartners {
        a: PersonId,
        b: PersonId,
    },
    DissolvePartners {
        a: PersonId,
        b: PersonId,
    },
    SetRoot {
        id: Option<PersonId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: TreeDelta,
}

/// Persons and relations touched by a batch, each list sorted.
///
/// Coarse on purpose: a person is `updated` when its own fields or its partner unions
/// changed; relation changes are reported as triples only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TreeDelta {
    pub added: Vec<PersonId>,
    pub removed: Vec<PersonId>,
    pub updated: Vec<PersonId>,
    pub relations_added: Vec<Relation>,
    pub relations_removed: Vec<Relation>,
}

impl TreeDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.updated.is_empty()
            && self.relations_added.is_empty()
            && self.relations_removed.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<PersonId>,
    removed: BTreeSet<PersonId>,
    updated: BTreeSet<PersonId>,
    relations_added: BTreeSet<Relation>,
    relations_removed: BTreeSet<Relation>,
}

impl DeltaBuilder {
    fn record_added(&mut self, person: PersonId) {
        self.updated.remove(&person);
        if !self.removed.remove(&person) {
            self.added.insert(person);
        } else {
            self.updated.insert(person);
        }
    }

    fn record_removed(&mut self, person: PersonId) {
        self.updated.remove(&person);
        if !self.added.remove(&person) {
            self.removed.insert(person);
        }
    }

    fn record_updated(&mut self, person: PersonId) {
        if self.added.contains(&person) || self.removed.contains(&person) {
            return;
        }
        self.updated.insert(person);
    }

    fn record_relation_added(&mut self, relation: Relation) {
        if !self.relations_removed.remove(&relation) {
            self.relations_added.insert(relation);
        }
    }

    fn record_relation_removed(&mut self, relation: Relation) {
        if !self.relations_added.remove(&relation) {
            self.relations_removed.insert(relation);
        }
    }

    fn finish(self) -> TreeDelta {
        TreeDelta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
            relations_added: self.relations_added.into_iter().collect(),
            relations_removed: self.relations_removed.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("stale base_rev (base_rev={base_rev}, current_rev={current_rev})")]
    Conflict { base_rev: u64, current_rev: u64 },
    #[error("op #{index} failed: {source}")]
    Store {
        index: usize,
        #[source]
        source: StoreError,
    },
    #[error("op #{index}: relation {relation} does not exist")]
    MissingRelation { index: usize, relation: Relation },
    #[error("op #{index}: {a} and {b} are not declared partners")]
    MissingUnion {
        index: usize,
        a: PersonId,
        b: PersonId,
    },
}

impl ApplyError {
    /// Position of the failing op within the batch, if the error came from one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Conflict { .. } => None,
            Self::Store { index, .. }
            | Self::MissingRelation { index, .. }
            | Self::MissingUnion { index, .. } => Some(*index),
        }
    }
}

/// Applies `ops` in order. On any error `tree` is left untouched.
pub fn apply_ops(
    tree: &mut FamilyTree,
    base_rev: u64,
    ops: &[TreeOp],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = tree.rev();
    if base_rev != current_rev {
        tracing::warn!(base_rev, current_rev, "rejected edit batch with stale revision");
        return Err(ApplyError::Conflict { base_rev, current_rev });
    }

    if ops.is_empty() {
        return Ok(ApplyResult { new_rev: current_rev, applied: 0, delta: TreeDelta::default() });
    }

    let mut next = tree.clone();
    let mut delta = DeltaBuilder::default();
    for (index, op) in ops.iter().enumerate() {
        if let Err(err) = apply_tree_op(&mut next, index, op, &mut delta) {
            tracing::warn!(index, error = %err, "rejected edit batch");
            return Err(err);
        }
    }

    next.bump_rev();
    *tree = next;
    let delta = delta.finish();
    tracing::debug!(
        new_rev = tree.rev(),
        applied = ops.len(),
        added = delta.added.len(),
        removed = delta.removed.len(),
        relations_added = delta.relations_added.len(),
        relations_removed = delta.relations_removed.len(),
        "edit batch applied"
    );

    Ok(ApplyResult { new_rev: tree.rev(), applied: ops.len(), delta })
}

fn apply_tree_op(
    tree: &mut FamilyTree,
    index: usize,
    op: &TreeOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    let store = |source: StoreError| ApplyError::Store { index, source };

    match op {
        TreeOp::AddPerson { id, label, birth_key } => {
            let person = Person::new(label.as_str()).with_birth_key(*birth_key);
            tree.add_person(id.clone(), person).map_err(store)?;
            delta.record_added(id.clone());
        }
        TreeOp::RemovePerson { id } => {
            let removed = tree.remove_person(id).map_err(store)?;
            for relation in removed.relations {
                for end in [&relation.parent, &relation.child] {
                    if end != id {
                        delta.record_updated(end.clone());
                    }
                }
                delta.record_relation_removed(relation);
            }
            for union in removed.unions {
                if let Some(other) = union.other(id) {
                    delta.record_updated(other.clone());
                }
            }
            delta.record_removed(id.clone());
        }
        TreeOp::SetLabel { id, label } => {
            tree.set_label(id, label).map_err(store)?;
            delta.record_updated(id.clone());
        }
        TreeOp::SetBirthKey { id, birth_key } => {
            tree.set_birth_key(id, *birth_key).map_err(store)?;
            delta.record_updated(id.clone());
        }
        TreeOp::AddRelation { parent, child, kind } => {
            tree.add_relation(parent, child, *kind).map_err(store)?;
            delta.record_relation_added(Relation::new(parent.clone(), child.clone(), *kind));
        }
        TreeOp::RemoveRelation { parent, child, kind } => {
            let relation = Relation::new(parent.clone(), child.clone(), *kind);
            if !tree.remove_relation(parent, child, *kind) {
                return Err(ApplyError::MissingRelation { index, relation });
            }
            delta.record_relation_removed(relation);
        }
        TreeOp::DeclarePartners { a, b } => {
            if tree.declare_partners(a, b).map_err(store)? {
                delta.record_updated(a.clone());
                delta.record_updated(b.clone());
            }
        }
        TreeOp::DissolvePartners { a, b } => {
            if !tree.dissolve_partners(a, b) {
                return Err(ApplyError::MissingUnion { index, a: a.clone(), b: b.clone() });
            }
            delta.record_updated(a.clone());
            delta.record_updated(b.clone());
        }
        TreeOp::SetRoot { id } => {
            let previous = tree.root().cloned();
            tree.set_root(id.clone()).map_err(store)?;
            for person in previous.into_iter().chain(id.iter().cloned()) {
                delta.record_updated(person);
            }
        }
    }
    Ok(())
}
