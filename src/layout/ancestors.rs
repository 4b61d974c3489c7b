// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::geometry::{NodeRole, PlacedNode, Point};
use super::neighborhood::Placement;
use crate::model::PersonId;
use crate::query::{HiddenRelatives, QueryError, Resolver};

/// Bounded breadth-first ancestor expansion.
///
/// Level `g` holds `2^g` slots; the parents of slot `s` sit at `2s` and `2s + 1` of level
/// `g + 1`. Absent parents stay as `None` so every slot keeps its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorLevels {
    levels: Vec<Vec<Option<PersonId>>>,
    budget_exhausted: bool,
}

impl AncestorLevels {
    pub fn expand(
        resolver: &Resolver<'_>,
        focus: &PersonId,
        max_depth: usize,
    ) -> Result<Self, QueryError> {
        resolver.genetic_parents(focus)?;

        let mut levels = vec![vec![Some(focus.clone())]];
        for depth in 1..=max_depth {
            let prev = &levels[depth - 1];
            let mut next = Vec::with_capacity(prev.len() * 2);
            for slot in prev {
                match slot {
                    Some(person) => next.extend(resolver.ordered_genetic_parents(person)?),
                    None => next.extend([None, None]),
                }
            }
            if next.iter().all(Option::is_none) {
                break;
            }
            levels.push(next);
        }

        let mut budget_exhausted = false;
        if levels.len() == max_depth + 1 {
            for person in levels[max_depth].iter().flatten() {
                if !resolver.genetic_parents(person)?.is_empty() {
                    budget_exhausted = true;
                    break;
                }
            }
        }

        tracing::debug!(
            generations = levels.len() - 1,
            budget_exhausted,
            "ancestor levels expanded"
        );
        Ok(Self { levels, budget_exhausted })
    }

    pub fn levels(&self) -> &[Vec<Option<PersonId>>] {
        &self.levels
    }

    /// Generations kept above the focus.
    pub fn generations(&self) -> usize {
        self.levels.len() - 1
    }

    /// Whether some ancestor at the depth limit still has recorded parents.
    pub fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    pub fn slot(&self, generation: usize, index: usize) -> Option<&PersonId> {
        self.levels.get(generation)?.get(index)?.as_ref()
    }
}

/// Places every kept ancestor slot and the connectors between generations.
pub(crate) fn place_ancestors(
    placement: &mut Placement<'_>,
    levels: &AncestorLevels,
) -> Result<(), QueryError> {
    let rows = levels.levels();
    for generation in 1..rows.len() {
        for (index, slot) in rows[generation].iter().enumerate() {
            let Some(child) = rows[generation - 1][index / 2].as_ref() else {
                continue;
            };
            let at = placement.slot_origin(generation, index);
            let node = match slot {
                Some(person) => {
                    let visible_children = BTreeSet::from([child.clone()]);
                    let co_parent_shown = rows[generation][index ^ 1].is_some();
                    let hidden = placement.resolver.has_hidden_relatives(
                        person,
                        &HiddenRelatives {
                            level_budget_exhausted: generation == placement.max_depth,
                            visible_children: &visible_children,
                            min_visible_partners: usize::from(co_parent_shown),
                        },
                    )?;
                    let hints = placement
                        .resolver
                        .genetic_parent_kind(child, person)?
                        .into_iter()
                        .collect();
                    PlacedNode::person(person.clone(), at, NodeRole::Ancestor)
                        .with_style_hints(hints)
                        .with_hidden_relatives(hidden)
                }
                None => PlacedNode::placeholder(child.clone(), at),
            };
            placement.canvas.push_node(node);
        }
    }

    connect_generations(placement, rows)
}

fn connect_generations(
    placement: &mut Placement<'_>,
    rows: &[Vec<Option<PersonId>>],
) -> Result<(), QueryError> {
    let card_width = placement.config.card_width;
    let card_height = placement.config.card_height;
    let vgap = placement.config.vgap;

    for generation in 0..rows.len().saturating_sub(1) {
        for (index, slot) in rows[generation].iter().enumerate() {
            let Some(child) = slot else {
                continue;
            };
            let child_origin = placement.slot_origin(generation, index);
            let child_top = Point::new(child_origin.x + card_width / 2.0, child_origin.y);

            let parents = &rows[generation + 1];
            let left = parents[2 * index].as_ref();
            let right = parents[2 * index + 1].as_ref();
            let left_origin = placement.slot_origin(generation + 1, 2 * index);
            let right_origin = placement.slot_origin(generation + 1, 2 * index + 1);

            match (left, right) {
                (Some(left), Some(right)) => {
                    let mid_y = left_origin.y + card_height / 2.0;
                    placement.canvas.segment(
                        Point::new(left_origin.x + card_width, mid_y),
                        Point::new(right_origin.x, mid_y),
                        None,
                    );
                    let left_kind = placement.resolver.genetic_parent_kind(child, left)?;
                    let right_kind = placement.resolver.genetic_parent_kind(child, right)?;
                    let style = if left_kind == right_kind { left_kind } else { None };
                    placement
                        .canvas
                        .segment(child_top, Point::new(child_top.x, mid_y), style);
                }
                (Some(parent), None) => {
                    let style = placement.resolver.genetic_parent_kind(child, parent)?;
                    placement.canvas.elbow(
                        child_top,
                        child_top.y - vgap / 2.0,
                        Point::new(left_origin.x + card_width / 2.0, left_origin.y + card_height),
                        style,
                    );
                }
                (None, Some(parent)) => {
                    let style = placement.resolver.genetic_parent_kind(child, parent)?;
                    placement.canvas.elbow(
                        child_top,
                        child_top.y - vgap / 2.0,
                        Point::new(right_origin.x + card_width / 2.0, right_origin.y + card_height),
                        style,
                    );
                }
                (None, None) => {}
            }
        }
    }
    Ok(())
}
