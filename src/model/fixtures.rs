// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::PersonId;
use super::person::{ChronoKey, Person};
use super::relation::RelationKind;
use super::tree::FamilyTree;

pub(crate) fn pid(value: &str) -> PersonId {
    PersonId::new(value).expect("person id")
}

fn add(tree: &mut FamilyTree, id: &str, label: &str, born: Option<i64>) {
    tree.add_person(pid(id), Person::new(label).with_birth_key(born.map(ChronoKey)))
        .expect("add person");
}

fn relate(tree: &mut FamilyTree, parent: &str, child: &str, kind: RelationKind) {
    tree.add_relation(&pid(parent), &pid(child), kind).expect("add relation");
}

/// A blended family around `a`:
///
/// - parents `b` + `c`; full siblings `o` (older) and `d` (younger)
/// - half sibling `g` (`b` + egg donor `e`), half sibling `h` (`c` only)
/// - `c` has a mother `cm`; `b` has no recorded parents
/// - partner `p1` with children `k1`, `k2`; partner-only union with `p2`; child `k3` alone
/// - adoptive parent `ad`, godparents `gp1`, `gp2`
pub(crate) fn scenario_tree() -> FamilyTree {
    let mut tree = FamilyTree::new();

    add(&mut tree, "a", "Alice", Some(1990));
    add(&mut tree, "b", "Bert", Some(1960));
    add(&mut tree, "c", "Cora", Some(1962));
    add(&mut tree, "cm", "Clara", Some(1935));
    add(&mut tree, "d", "Dora", Some(1992));
    add(&mut tree, "o", "Otto", Some(1987));
    add(&mut tree, "e", "Edda", Some(1970));
    add(&mut tree, "g", "Gus", Some(1995));
    add(&mut tree, "h", "Hal", Some(1998));
    add(&mut tree, "p1", "Paul", Some(1989));
    add(&mut tree, "p2", "Pia", Some(1991));
    add(&mut tree, "k1", "Kai", Some(2015));
    add(&mut tree, "k2", "Kit", Some(2018));
    add(&mut tree, "k3", "Kim", Some(2020));
    add(&mut tree, "ad", "Ada", Some(1958));
    add(&mut tree, "gp1", "Gina", Some(1950));
    add(&mut tree, "gp2", "Gabe", Some(1945));

    for child in ["a", "d", "o"] {
        relate(&mut tree, "b", child, RelationKind::BiologicalParent);
        relate(&mut tree, "c", child, RelationKind::BiologicalParent);
    }
    relate(&mut tree, "b", "g", RelationKind::BiologicalParent);
    relate(&mut tree, "e", "g", RelationKind::EggDonor);
    relate(&mut tree, "c", "h", RelationKind::BiologicalParent);
    relate(&mut tree, "cm", "c", RelationKind::BiologicalParent);

    for child in ["k1", "k2"] {
        relate(&mut tree, "a", child, RelationKind::BiologicalParent);
        relate(&mut tree, "p1", child, RelationKind::BiologicalParent);
    }
    relate(&mut tree, "a", "k3", RelationKind::BiologicalParent);
    tree.declare_partners(&pid("a"), &pid("p2")).expect("union");

    relate(&mut tree, "ad", "a", RelationKind::AdoptiveParent);
    relate(&mut tree, "gp1", "a", RelationKind::Godparent);
    relate(&mut tree, "gp2", "a", RelationKind::Godparent);

    tree.set_root(Some(pid("a"))).expect("root");
    tree
}

/// A complete pedigree `generations` deep above `p1`, ids are Ahnentafel numbers
/// (`p2`/`p3` are the parents of `p1`).
pub(crate) fn full_pedigree(generations: u32) -> FamilyTree {
    let mut tree = FamilyTree::new();
    let count = (1u64 << (generations + 1)) - 1;
    for n in 1..=count {
        let id = format!("p{n}");
        let generation = i64::from(63 - n.leading_zeros());
        let born = 10_000 - 100 * generation + n as i64;
        add(&mut tree, &id, &format!("Person {n}"), Some(born));
    }
    for n in 1..=count {
        for parent in [2 * n, 2 * n + 1] {
            if parent <= count {
                relate(
                    &mut tree,
                    &format!("p{parent}"),
                    &format!("p{n}"),
                    RelationKind::BiologicalParent,
                );
            }
        }
    }
    tree.set_root(Some(pid("p1"))).expect("root");
    tree
}
