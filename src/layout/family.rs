// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The focus row: siblings, partner unions and the children row below them.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::geometry::{NodeRole, PlacedNode, Point};
use super::neighborhood::Placement;
use crate::query::{HiddenRelatives, PartnerGroup, QueryError};

/// Places partner cards right of the focus and each group's children one row below.
///
/// Returns the right edge of the last card placed on the focus row.
pub(crate) fn place_partners(
    placement: &mut Placement<'_>,
    groups: &[PartnerGroup],
) -> Result<f64, QueryError> {
    let card_width = placement.config.card_width;
    let card_height = placement.config.card_height;
    let gap = placement.config.base_gap;
    let vgap = placement.config.vgap;
    let unit = placement.config.unit();

    let focus = placement.focus_origin();
    let focus_center = focus.x + card_width / 2.0;
    let focus_bottom = focus.y + card_height;
    let children_y = focus.y + placement.config.row_step();
    let step = vgap / 2.0 / (groups.len() as f64 + 1.0);

    let mut row_right = focus.x + card_width;
    let mut fan_right = f64::NEG_INFINITY;

    for (i, group) in groups.iter().enumerate() {
        let union_y = focus_bottom + (i as f64 + 1.0) * step;
        let bus_y = focus_bottom + vgap / 2.0 + (i as f64 + 1.0) * step;
        let count = group.children.len();
        let fan_width = count as f64 * card_width + count.saturating_sub(1) as f64 * gap;
        let fan_floor = fan_right + gap + fan_width / 2.0;

        let (fan_center, fan_source) = match &group.partner {
            Some(partner) => {
                let mut partner_center = row_right + gap + card_width / 2.0;
                if count > 0 {
                    partner_center = partner_center.max(2.0 * fan_floor - focus_center);
                }
                let partner_left = partner_center - card_width / 2.0;
                row_right = partner_left + card_width;

                let visible_children = group.children.iter().cloned().collect::<BTreeSet<_>>();
                let hidden = placement.resolver.has_hidden_relatives(
                    partner,
                    &HiddenRelatives {
                        level_budget_exhausted: true,
                        visible_children: &visible_children,
                        min_visible_partners: 1,
                    },
                )?;
                placement.canvas.push_node(
                    PlacedNode::person(
                        partner.clone(),
                        Point::new(partner_left, focus.y),
                        NodeRole::Partner,
                    )
                    .with_hidden_relatives(hidden),
                );
                placement.canvas.elbow(
                    Point::new(focus_center, focus_bottom),
                    union_y,
                    Point::new(partner_center, focus_bottom),
                    None,
                );

                let midpoint = (focus_center + partner_center) / 2.0;
                (midpoint, Point::new(midpoint, union_y))
            }
            None => {
                let center = if count > 0 { focus_center.max(fan_floor) } else { focus_center };
                (center, Point::new(focus_center, focus_bottom))
            }
        };

        if count == 0 {
            continue;
        }

        let fan_left = fan_center - fan_width / 2.0;
        let mut drops = vec![(fan_source, None)];
        for (j, child) in group.children.iter().enumerate() {
            let at = Point::new(fan_left + j as f64 * unit, children_y);
            let kinds = placement.resolver.relations().kinds_between(&placement.focus, child);
            let hidden = placement.resolver.has_hidden_relatives(
                child,
                &HiddenRelatives {
                    level_budget_exhausted: false,
                    visible_children: &BTreeSet::new(),
                    min_visible_partners: 0,
                },
            )?;
            drops.push((Point::new(at.x + card_width / 2.0, at.y), kinds.first().copied()));
            placement.canvas.push_node(
                PlacedNode::person(child.clone(), at, NodeRole::Child)
                    .with_style_hints(kinds)
                    .with_hidden_relatives(hidden),
            );
        }
        placement.canvas.bus(bus_y, &drops);
        fan_right = fan_left + fan_width;
    }

    tracing::trace!(groups = groups.len(), row_right, "partner groups placed");
    Ok(row_right)
}

/// Places the exact siblings of the focus: older ones to the left, younger ones starting
/// at `right_start`, all joined by a bus above the focus row.
pub(crate) fn place_siblings(
    placement: &mut Placement<'_>,
    right_start: f64,
) -> Result<usize, QueryError> {
    let card_width = placement.config.card_width;
    let unit = placement.config.unit();
    let focus = placement.focus_origin();

    let siblings = placement.resolver.same_parents_siblings(&placement.focus)?;
    let siblings = placement.resolver.sort_persons(siblings);
    if siblings.is_empty() {
        return Ok(0);
    }
    let (older, younger): (Vec<_>, Vec<_>) = siblings
        .into_iter()
        .partition(|sibling| placement.resolver.compare(sibling, &placement.focus) == Ordering::Less);

    let mut placed = Vec::with_capacity(older.len() + younger.len());
    for (i, sibling) in older.iter().rev().enumerate() {
        placed.push((sibling, Point::new(focus.x - (i as f64 + 1.0) * unit, focus.y)));
    }
    for (i, sibling) in younger.iter().enumerate() {
        placed.push((sibling, Point::new(right_start + i as f64 * unit, focus.y)));
    }

    let mut drops = vec![(Point::new(focus.x + card_width / 2.0, focus.y), None)];
    for (sibling, at) in &placed {
        let hidden = placement.resolver.has_hidden_relatives(
            sibling,
            &HiddenRelatives {
                level_budget_exhausted: false,
                visible_children: &BTreeSet::new(),
                min_visible_partners: 0,
            },
        )?;
        placement.canvas.push_node(
            PlacedNode::person((*sibling).clone(), *at, NodeRole::Sibling)
                .with_hidden_relatives(hidden),
        );
        drops.push((Point::new(at.x + card_width / 2.0, at.y), None));
    }
    placement
        .canvas
        .bus(focus.y - placement.config.vgap / 4.0, &drops);

    Ok(placed.len())
}
