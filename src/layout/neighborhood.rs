// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ancestors::{place_ancestors, AncestorLevels};
use super::config::{ConfigError, LayoutConfig, DEPTH_RANGE, MAX_DEPTH, MIN_DEPTH};
use super::family::{place_partners, place_siblings};
use super::geometry::{Canvas, LayoutResult, NodeRole, PlacedNode, Point};
use super::secondary::place_secondary_parents;
use crate::model::{FamilyTree, PersonId};
use crate::query::{QueryError, Resolver};

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("focus person {focus} is not in the tree")]
    FocusNotInTree { focus: PersonId },
    #[error("no focus given and the tree has no root person")]
    NoFocus,
    #[error("max depth {depth} is outside {min}..={max}", min = MIN_DEPTH, max = MAX_DEPTH)]
    InvalidDepth { depth: u8 },
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Mutable state of one layout pass. Nothing survives the call.
pub(crate) struct Placement<'a> {
    pub(crate) resolver: Resolver<'a>,
    pub(crate) config: &'a LayoutConfig,
    pub(crate) canvas: Canvas,
    pub(crate) focus: PersonId,
    /// Ancestor generations kept above the focus.
    pub(crate) generations: usize,
    pub(crate) max_depth: usize,
}

impl Placement<'_> {
    /// Top-left corner of slot `index` in ancestor generation `generation` (0 = focus).
    ///
    /// Rows are counted from the deepest kept generation down, so slot spans double with
    /// every row towards the top and each child sits centred under its two parent slots.
    pub(crate) fn slot_origin(&self, generation: usize, index: usize) -> Point {
        let unit = self.config.unit();
        let row = self.generations - generation;
        let span = f64::from(1u32 << row) * unit;
        Point::new(
            self.config.base_gap + index as f64 * span + (span - unit) / 2.0,
            self.config.base_gap + row as f64 * self.config.row_step(),
        )
    }

    pub(crate) fn focus_origin(&self) -> Point {
        self.slot_origin(0, 0)
    }
}

/// Lays out the neighbourhood of `focus`, or of the tree's root when no focus is given.
pub fn layout_neighborhood(
    tree: &FamilyTree,
    config: &LayoutConfig,
    focus: Option<&PersonId>,
    max_depth: u8,
) -> Result<LayoutResult, LayoutError> {
    let focus = focus.or_else(|| tree.root()).ok_or(LayoutError::NoFocus)?;
    layout_with_resolver(Resolver::new(tree), config, focus, max_depth)
}

/// Same as [`layout_neighborhood`] over any resolver, e.g. one backed by an external
/// directory of birth keys and partner unions.
pub fn layout_with_resolver(
    resolver: Resolver<'_>,
    config: &LayoutConfig,
    focus: &PersonId,
    max_depth: u8,
) -> Result<LayoutResult, LayoutError> {
    if !resolver.contains(focus) {
        return Err(LayoutError::FocusNotInTree {
            focus: focus.clone(),
        });
    }
    if !DEPTH_RANGE.contains(&max_depth) {
        return Err(LayoutError::InvalidDepth { depth: max_depth });
    }
    config.validate()?;

    let _span = tracing::debug_span!("layout", focus = %focus, max_depth).entered();

    let levels = AncestorLevels::expand(&resolver, focus, usize::from(max_depth))?;
    let groups = resolver.partners_and_children(focus)?;

    let mut placement = Placement {
        resolver,
        config,
        canvas: Canvas::default(),
        focus: focus.clone(),
        generations: levels.generations(),
        max_depth: usize::from(max_depth),
    };

    place_focus(&mut placement);
    place_ancestors(&mut placement, &levels)?;
    let row_right = place_partners(&mut placement, &groups)?;
    let siblings = place_siblings(&mut placement, row_right + config.base_gap)?;
    let lanes = place_secondary_parents(&mut placement)?;

    let Placement { mut canvas, .. } = placement;
    canvas.normalize(config.margin);
    let (nodes, edges) = canvas.finish();

    tracing::debug!(
        generations = levels.generations(),
        partner_groups = groups.len(),
        siblings,
        lanes,
        nodes = nodes.len(),
        edges = edges.len(),
        "layout finished"
    );

    Ok(LayoutResult {
        focus: focus.clone(),
        max_depth,
        generations: levels.generations(),
        card_width: config.card_width,
        card_height: config.card_height,
        nodes,
        edges,
    })
}

// Every child and partner of the focus is placed, so its card never hides relatives.
fn place_focus(placement: &mut Placement<'_>) {
    let at = placement.focus_origin();
    placement
        .canvas
        .push_node(PlacedNode::person(placement.focus.clone(), at, NodeRole::Focus));
}
