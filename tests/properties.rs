// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use proptest::prelude::*;

use kindred::layout::{layout_neighborhood, LayoutConfig, LayoutResult, MAX_DEPTH, MIN_DEPTH};
use kindred::model::{ChronoKey, FamilyTree, Person, PersonId, RelationKind};
use kindred::query::Resolver;

const MAX_PERSONS: usize = 10;

#[derive(Debug, Clone)]
enum Edit {
    Add { parent: usize, child: usize, kind: RelationKind },
    Remove { parent: usize, child: usize, kind: RelationKind },
    Partners { a: usize, b: usize },
}

fn pid(n: usize) -> PersonId {
    PersonId::new(format!("p{n}")).expect("person id")
}

// -- Strategy helpers --

fn arb_kind() -> impl Strategy<Value = RelationKind> {
    prop::sample::select(RelationKind::ALL.to_vec())
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    let index = 0..MAX_PERSONS;
    prop_oneof![
        4 => (index.clone(), index.clone(), arb_kind())
            .prop_map(|(parent, child, kind)| Edit::Add { parent, child, kind }),
        1 => (index.clone(), index.clone(), arb_kind())
            .prop_map(|(parent, child, kind)| Edit::Remove { parent, child, kind }),
        1 => (index.clone(), index).prop_map(|(a, b)| Edit::Partners { a, b }),
    ]
}

/// Birth keys for 2..=MAX_PERSONS persons plus a batch of edits; invalid edits are
/// expected to be rejected by the store and are skipped.
fn arb_family() -> impl Strategy<Value = FamilyTree> {
    (
        prop::collection::vec(prop::option::of(1900i64..2030), 2..=MAX_PERSONS),
        prop::collection::vec(arb_edit(), 0..60),
    )
        .prop_map(|(births, edits)| {
            let n = births.len();
            let mut tree = FamilyTree::new();
            for (i, born) in births.into_iter().enumerate() {
                let person = Person::new(format!("Person {}", i % 3)).with_birth_key(born.map(ChronoKey));
                tree.add_person(pid(i), person).expect("fresh id");
            }
            for edit in edits {
                match edit {
                    Edit::Add { parent, child, kind } => {
                        let _ = tree.add_relation(&pid(parent % n), &pid(child % n), kind);
                    }
                    Edit::Remove { parent, child, kind } => {
                        tree.remove_relation(&pid(parent % n), &pid(child % n), kind);
                    }
                    Edit::Partners { a, b } => {
                        let _ = tree.declare_partners(&pid(a % n), &pid(b % n));
                    }
                }
            }
            tree
        })
}

fn arb_case() -> impl Strategy<Value = (FamilyTree, usize, u8)> {
    (arb_family(), 0..MAX_PERSONS, MIN_DEPTH..=MAX_DEPTH)
        .prop_map(|(tree, focus, depth)| {
            let focus = focus % tree.len();
            (tree, focus, depth)
        })
}

fn min_coordinates(result: &LayoutResult) -> (f64, f64) {
    let min_x = result
        .nodes
        .iter()
        .map(|n| n.x)
        .chain(result.edges.iter().flat_map(|e| [e.x1, e.x2]))
        .fold(f64::INFINITY, f64::min);
    let min_y = result
        .nodes
        .iter()
        .map(|n| n.y)
        .chain(result.edges.iter().flat_map(|e| [e.y1, e.y2]))
        .fold(f64::INFINITY, f64::min);
    (min_x, min_y)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn capacities_hold_after_any_edit_sequence(tree in arb_family()) {
        let resolver = Resolver::new(&tree);
        for child in tree.people().keys() {
            for kind in RelationKind::ALL {
                if let Some(max) = kind.max_parents() {
                    let count = resolver.parents_of(child, kind).expect("known").len();
                    prop_assert!(count <= max, "{child} has {count} {kind} parents");
                }
            }
            prop_assert!(resolver.genetic_parents(child).expect("known").len() <= 2);
        }
    }

    #[test]
    fn exact_siblings_are_symmetric(tree in arb_family()) {
        let resolver = Resolver::new(&tree);
        for a in tree.people().keys() {
            for b in resolver.same_parents_siblings(a).expect("known") {
                prop_assert!(
                    resolver.same_parents_siblings(&b).expect("known").contains(a),
                    "{b} is a sibling of {a} but not the other way round"
                );
            }
        }
    }

    #[test]
    fn layout_is_deterministic((tree, focus, depth) in arb_case()) {
        let config = LayoutConfig::default();
        let first = layout_neighborhood(&tree, &config, Some(&pid(focus)), depth).expect("layout");
        let second = layout_neighborhood(&tree.clone(), &config, Some(&pid(focus)), depth)
            .expect("layout");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cards_on_one_row_never_overlap((tree, focus, depth) in arb_case()) {
        let result = layout_neighborhood(&tree, &LayoutConfig::default(), Some(&pid(focus)), depth)
            .expect("layout");
        let mut rows = BTreeMap::<u64, Vec<f64>>::new();
        for node in &result.nodes {
            rows.entry(node.y.to_bits()).or_default().push(node.x);
        }
        for xs in rows.values_mut() {
            xs.sort_by(f64::total_cmp);
            for pair in xs.windows(2) {
                prop_assert!(pair[1] - pair[0] >= result.card_width, "overlap in {:?}", xs);
            }
        }
    }

    #[test]
    fn geometry_is_normalised_to_the_margin(
        (tree, focus, depth) in arb_case(),
        margin in 0u8..40,
    ) {
        let config = LayoutConfig { margin: f64::from(margin), ..LayoutConfig::default() };
        let result = layout_neighborhood(&tree, &config, Some(&pid(focus)), depth).expect("layout");
        prop_assert_eq!(min_coordinates(&result), (config.margin, config.margin));
    }
}
