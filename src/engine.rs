// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared entry point for readers and the single writer.
//!
//! Readers take an `Arc` snapshot and lay out from it without holding the lock. Writers
//! build the next tree off to the side and swap the `Arc` in, so a snapshot never changes
//! underneath a running layout.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::layout::{layout_neighborhood, LayoutConfig, LayoutError, LayoutResult};
use crate::model::{FamilyTree, PersonId};
use crate::ops::{apply_ops, ApplyError, ApplyResult, TreeOp};

#[derive(Debug)]
pub struct FamilyEngine {
    tree: RwLock<Arc<FamilyTree>>,
    config: LayoutConfig,
}

impl Default for FamilyEngine {
    fn default() -> Self {
        Self::new(FamilyTree::new(), LayoutConfig::default())
    }
}

impl FamilyEngine {
    pub fn new(tree: FamilyTree, config: LayoutConfig) -> Self {
        Self {
            tree: RwLock::new(Arc::new(tree)),
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // The lock only guards an `Arc` swap, so a poisoned guard still holds a whole tree.
    fn read(&self) -> RwLockReadGuard<'_, Arc<FamilyTree>> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<FamilyTree>> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The latest committed tree.
    pub fn snapshot(&self) -> Arc<FamilyTree> {
        Arc::clone(&self.read())
    }

    pub fn rev(&self) -> u64 {
        self.read().rev()
    }

    /// Applies `ops` against the latest revision.
    pub fn apply(&self, ops: &[TreeOp]) -> Result<ApplyResult, ApplyError> {
        let mut guard = self.write();
        let base_rev = guard.rev();
        Self::commit(&mut guard, base_rev, ops)
    }

    /// Applies `ops` only if the tree is still at `base_rev`.
    pub fn apply_at(&self, base_rev: u64, ops: &[TreeOp]) -> Result<ApplyResult, ApplyError> {
        let mut guard = self.write();
        Self::commit(&mut guard, base_rev, ops)
    }

    fn commit(
        current: &mut Arc<FamilyTree>,
        base_rev: u64,
        ops: &[TreeOp],
    ) -> Result<ApplyResult, ApplyError> {
        let mut next = (**current).clone();
        let result = apply_ops(&mut next, base_rev, ops)?;
        *current = Arc::new(next);
        Ok(result)
    }

    /// Lays out around `focus`, or around the root when `focus` is `None`.
    pub fn layout(
        &self,
        focus: Option<&PersonId>,
        max_depth: u8,
    ) -> Result<LayoutResult, LayoutError> {
        let tree = self.snapshot();
        layout_neighborhood(&tree, &self.config, focus, max_depth)
    }

    /// Whether `person` exists in the latest snapshot. The caller re-runs `layout` with it
    /// as the new focus.
    pub fn select(&self, person: &PersonId) -> bool {
        self.read().person(person).is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::FamilyEngine;
    use crate::layout::{LayoutConfig, LayoutError, DEFAULT_MAX_DEPTH};
    use crate::model::fixtures::{pid, scenario_tree};
    use crate::model::RelationKind;
    use crate::ops::{ApplyError, TreeOp};

    fn engine() -> FamilyEngine {
        FamilyEngine::new(scenario_tree(), LayoutConfig::default())
    }

    #[test]
    fn snapshots_are_not_affected_by_later_writes() {
        let engine = engine();
        let before = engine.snapshot();

        engine
            .apply(&[TreeOp::AddPerson { id: pid("new"), label: "New".into(), birth_key: None }])
            .expect("apply");

        assert!(before.person(&pid("new")).is_none());
        assert!(engine.snapshot().person(&pid("new")).is_some());
        assert_eq!(engine.rev(), 1);
    }

    #[test]
    fn failed_batches_do_not_publish_a_new_tree() {
        let engine = engine();
        let before = engine.snapshot();

        let err = engine
            .apply(&[TreeOp::AddRelation {
                parent: pid("a"),
                child: pid("a"),
                kind: RelationKind::Godparent,
            }])
            .expect_err("self relation");
        assert_eq!(err.index(), Some(0));
        assert!(Arc::ptr_eq(&before, &engine.snapshot()));

        let err = engine.apply_at(7, &[]).expect_err("stale");
        assert_eq!(err, ApplyError::Conflict { base_rev: 7, current_rev: 0 });
    }

    #[test]
    fn layout_defaults_to_the_root_and_select_checks_existence() {
        let engine = engine();
        let result = engine.layout(None, DEFAULT_MAX_DEPTH).expect("layout");
        assert_eq!(result.focus, pid("a"));

        assert!(engine.select(&pid("k2")));
        assert!(!engine.select(&pid("nobody")));
        let moved = engine.layout(Some(&pid("k2")), DEFAULT_MAX_DEPTH).expect("layout");
        assert_eq!(moved.focus, pid("k2"));

        let empty = FamilyEngine::default();
        assert!(matches!(empty.layout(None, 3), Err(LayoutError::NoFocus)));
    }

    #[test]
    fn readers_run_alongside_the_writer() {
        let engine = Arc::new(engine());
        let readers = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    for _ in 0..20 {
                        engine.layout(None, 3).expect("layout");
                    }
                })
            })
            .collect::<Vec<_>>();

        for n in 0..20 {
            engine
                .apply(&[TreeOp::AddPerson {
                    id: pid(&format!("extra{n}")),
                    label: format!("Extra {n}"),
                    birth_key: None,
                }])
                .expect("apply");
        }
        for reader in readers {
            reader.join().expect("reader thread");
        }
        assert_eq!(engine.rev(), 20);
    }
}
