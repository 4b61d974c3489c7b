// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::Serialize;

use crate::model::{PersonId, RelationKind};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Why a card was placed where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Focus,
    Ancestor,
    /// An empty parent slot offering "add a parent here".
    Placeholder,
    Sibling,
    Partner,
    Child,
    SecondaryParent,
}

/// One card. `x`/`y` are the card's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PlacedNode {
    #[schemars(with = "Option<String>")]
    pub person: Option<PersonId>,
    pub x: f64,
    pub y: f64,
    pub role: NodeRole,
    pub style_hints: Vec<RelationKind>,
    /// For placeholders: the children a new parent would attach to.
    #[schemars(with = "Vec<String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attaches_to: Vec<PersonId>,
    pub hidden_relatives: bool,
}

impl PlacedNode {
    pub(crate) fn person(person: PersonId, at: Point, role: NodeRole) -> Self {
        Self {
            person: Some(person),
            x: at.x,
            y: at.y,
            role,
            style_hints: Vec::new(),
            attaches_to: Vec::new(),
            hidden_relatives: false,
        }
    }

    pub(crate) fn placeholder(child: PersonId, at: Point) -> Self {
        Self {
            person: None,
            x: at.x,
            y: at.y,
            role: NodeRole::Placeholder,
            style_hints: Vec::new(),
            attaches_to: vec![child],
            hidden_relatives: false,
        }
    }

    pub(crate) fn with_style_hints(mut self, hints: Vec<RelationKind>) -> Self {
        self.style_hints = hints;
        self
    }

    pub(crate) fn with_hidden_relatives(mut self, hidden: bool) -> Self {
        self.hidden_relatives = hidden;
        self
    }
}

/// One straight connector segment.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct EdgeSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style_hint: Option<RelationKind>,
}

impl EdgeSegment {
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }
}

/// A complete, normalised placement snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct LayoutResult {
    #[schemars(with = "String")]
    pub focus: PersonId,
    pub max_depth: u8,
    /// Ancestor generations kept above the focus after trimming.
    pub generations: usize,
    pub card_width: f64,
    pub card_height: f64,
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<EdgeSegment>,
}

impl LayoutResult {
    pub fn node_for(&self, person: &PersonId) -> Option<&PlacedNode> {
        self.nodes.iter().find(|node| node.person.as_ref() == Some(person))
    }

    pub fn nodes_with_role(&self, role: NodeRole) -> impl Iterator<Item = &PlacedNode> + '_ {
        self.nodes.iter().filter(move |node| node.role == role)
    }
}

/// Accumulates nodes and segments during one layout pass.
#[derive(Debug, Default)]
pub(crate) struct Canvas {
    nodes: Vec<PlacedNode>,
    edges: Vec<EdgeSegment>,
}

impl Canvas {
    pub(crate) fn push_node(&mut self, node: PlacedNode) {
        self.nodes.push(node);
    }

    /// Adds a straight segment; zero-length segments are dropped.
    pub(crate) fn segment(&mut self, from: Point, to: Point, style_hint: Option<RelationKind>) {
        if from == to {
            return;
        }
        self.edges.push(EdgeSegment {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            style_hint,
        });
    }

    /// Vertical, then horizontal at `mid_y`, then vertical into `to`.
    pub(crate) fn elbow(
        &mut self,
        from: Point,
        mid_y: f64,
        to: Point,
        style_hint: Option<RelationKind>,
    ) {
        let bend_from = Point::new(from.x, mid_y);
        let bend_to = Point::new(to.x, mid_y);
        self.segment(from, bend_from, style_hint);
        self.segment(bend_from, bend_to, style_hint);
        self.segment(bend_to, to, style_hint);
    }

    /// A horizontal line at `bus_y` spanning every drop, plus one vertical per drop.
    pub(crate) fn bus(&mut self, bus_y: f64, drops: &[(Point, Option<RelationKind>)]) {
        let xs = drops.iter().map(|(at, _)| at.x);
        let (Some(min_x), Some(max_x)) = (xs.clone().reduce(f64::min), xs.reduce(f64::max)) else {
            return;
        };
        self.segment(Point::new(min_x, bus_y), Point::new(max_x, bus_y), None);
        for (at, style_hint) in drops {
            self.segment(*at, Point::new(at.x, bus_y), *style_hint);
        }
    }

    /// Translates everything so the smallest x and y equal `margin`.
    pub(crate) fn normalize(&mut self, margin: f64) {
        let xs = self
            .nodes
            .iter()
            .map(|n| n.x)
            .chain(self.edges.iter().flat_map(|e| [e.x1, e.x2]));
        let ys = self
            .nodes
            .iter()
            .map(|n| n.y)
            .chain(self.edges.iter().flat_map(|e| [e.y1, e.y2]));
        let (Some(min_x), Some(min_y)) = (xs.reduce(f64::min), ys.reduce(f64::min)) else {
            return;
        };

        let dx = margin - min_x;
        let dy = margin - min_y;
        for node in &mut self.nodes {
            node.x += dx;
            node.y += dy;
        }
        for edge in &mut self.edges {
            edge.x1 += dx;
            edge.x2 += dx;
            edge.y1 += dy;
            edge.y2 += dy;
        }
    }

    pub(crate) fn finish(self) -> (Vec<PlacedNode>, Vec<EdgeSegment>) {
        (self.nodes, self.edges)
    }
}
