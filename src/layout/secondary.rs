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
use crate::model::KindSide;
use crate::query::parents::KindParents;
use crate::query::{HiddenRelatives, QueryError};

/// Places non-genetic parents of the focus as lanes on the parent row.
///
/// Left-side kinds stack outward from the left edge of the genetic parent block, right-side
/// kinds from its right edge. Every present kind gets its own bus that ends on the focus's
/// top centre. Returns the number of lanes placed.
pub(crate) fn place_secondary_parents(placement: &mut Placement<'_>) -> Result<usize, QueryError> {
    let lanes = placement.resolver.secondary_parents(&placement.focus)?;
    if lanes.is_empty() {
        return Ok(0);
    }

    let card_width = placement.config.card_width;
    let card_height = placement.config.card_height;
    let gap = placement.config.base_gap;
    let vgap = placement.config.vgap;
    let unit = placement.config.unit();

    let focus = placement.focus_origin();
    let focus_top = Point::new(focus.x + card_width / 2.0, focus.y);
    let row_y = focus.y - placement.config.row_step();
    let (block_left, block_right) = if placement.generations > 0 {
        let left = placement.slot_origin(1, 0);
        let right = placement.slot_origin(1, 1);
        (left.x, right.x + card_width)
    } else {
        (focus.x, focus.x + card_width)
    };

    // Partners already visible on the parent row: the genetic parents and every lane.
    let mut row_people = placement.resolver.genetic_parents(&placement.focus)?;
    row_people.extend(lanes.iter().flat_map(|lane| lane.parents.iter().cloned()));

    let (left, right): (Vec<KindParents>, Vec<KindParents>) = lanes
        .into_iter()
        .partition(|lane| lane.kind.side() == KindSide::Left);
    let lane_count = left.len() + right.len();
    let bus_step = vgap / 2.0 / (lane_count as f64 + 1.0);

    let mut left_cursor = block_left;
    let mut right_cursor = block_right + gap;
    for (j, lane) in left.iter().chain(right.iter()).enumerate() {
        let width = lane.parents.len() as f64 * unit;
        let lane_left = if lane.kind.side() == KindSide::Left {
            left_cursor -= width;
            left_cursor
        } else {
            let start = right_cursor;
            right_cursor += width;
            start
        };

        let bus_y = row_y + card_height + (j as f64 + 1.0) * bus_step;
        let mut drops = vec![(focus_top, Some(lane.kind))];
        for (t, parent) in lane.parents.iter().enumerate() {
            let at = Point::new(lane_left + t as f64 * unit, row_y);
            let shown_partners = placement
                .resolver
                .partners_of(parent)?
                .intersection(&row_people)
                .count();
            let hidden = placement.resolver.has_hidden_relatives(
                parent,
                &HiddenRelatives {
                    level_budget_exhausted: true,
                    visible_children: &BTreeSet::from([placement.focus.clone()]),
                    min_visible_partners: shown_partners,
                },
            )?;
            placement.canvas.push_node(
                PlacedNode::person(parent.clone(), at, NodeRole::SecondaryParent)
                    .with_style_hints(vec![lane.kind])
                    .with_hidden_relatives(hidden),
            );
            drops.push((
                Point::new(at.x + card_width / 2.0, row_y + card_height),
                Some(lane.kind),
            ));
        }
        placement.canvas.bus(bus_y, &drops);
    }

    tracing::trace!(lanes = lane_count, "secondary parent lanes placed");
    Ok(lane_count)
}
