// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Shared deterministic benchmark fixtures (no RNG).

use kindred::model::{ChronoKey, FamilyTree, PersonId, RelationKind};
use kindred::ops::{apply_ops, TreeOp};

pub fn pid(value: &str) -> PersonId {
    PersonId::new(value).expect("person id")
}

fn add(ops: &mut Vec<TreeOp>, id: &str, born: i64) {
    ops.push(TreeOp::AddPerson {
        id: pid(id),
        label: format!("Person {id}"),
        birth_key: Some(ChronoKey(born)),
    });
}

fn relate(ops: &mut Vec<TreeOp>, parent: &str, child: &str, kind: RelationKind) {
    ops.push(TreeOp::AddRelation {
        parent: pid(parent),
        child: pid(child),
        kind,
    });
}

fn build(ops: &[TreeOp], root: &str) -> FamilyTree {
    let mut tree = FamilyTree::new();
    apply_ops(&mut tree, 0, ops).expect("fixture ops");
    apply_ops(&mut tree, 1, &[TreeOp::SetRoot { id: Some(pid(root)) }]).expect("root");
    tree
}

/// Complete pedigree `generations` deep above `n1` (Ahnentafel numbering).
pub fn pedigree(generations: u32) -> FamilyTree {
    let count = (1u64 << (generations + 1)) - 1;
    let mut ops = Vec::new();
    for n in 1..=count {
        let generation = i64::from(63 - n.leading_zeros());
        add(&mut ops, &format!("n{n}"), 10_000 - 100 * generation);
    }
    for n in 1..=count {
        for parent in [2 * n, 2 * n + 1] {
            if parent <= count {
                relate(&mut ops, &format!("n{parent}"), &format!("n{n}"), RelationKind::BiologicalParent);
            }
        }
    }
    build(&ops, "n1")
}

/// Focus `f` with `siblings` full siblings, `partners` partners each with `children`
/// children, plus one secondary parent per left-side kind.
pub fn wide_family(siblings: usize, partners: usize, children: usize) -> FamilyTree {
    let mut ops = Vec::new();
    add(&mut ops, "f", 1990);
    add(&mut ops, "pa", 1960);
    add(&mut ops, "pb", 1961);
    relate(&mut ops, "pa", "f", RelationKind::BiologicalParent);
    relate(&mut ops, "pb", "f", RelationKind::BiologicalParent);

    for s in 0..siblings {
        let id = format!("s{s}");
        add(&mut ops, &id, 1980 + s as i64);
        relate(&mut ops, "pa", &id, RelationKind::BiologicalParent);
        relate(&mut ops, "pb", &id, RelationKind::BiologicalParent);
    }
    for p in 0..partners {
        let partner = format!("m{p}");
        add(&mut ops, &partner, 1988 + p as i64);
        for c in 0..children {
            let child = format!("m{p}c{c}");
            add(&mut ops, &child, 2015 + (p * children + c) as i64);
            relate(&mut ops, "f", &child, RelationKind::BiologicalParent);
            relate(&mut ops, &partner, &child, RelationKind::BiologicalParent);
        }
    }
    for (i, kind) in [
        RelationKind::NonBiologicalParent,
        RelationKind::AdoptiveParent,
        RelationKind::FosterParent,
        RelationKind::Godparent,
    ]
    .into_iter()
    .enumerate()
    {
        let id = format!("x{i}");
        add(&mut ops, &id, 1950 + i as i64);
        relate(&mut ops, &id, "f", kind);
    }
    build(&ops, "f")
}
