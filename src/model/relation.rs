// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::PersonId;

/// Shared cap on genetic parents of one child, across all genetic kinds.
pub const MAX_GENETIC_PARENTS: usize = 2;

/// The typed parent→child relations a family tree can hold.
///
/// Variant order is the order used for every per-kind iteration, so it must stay stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    BiologicalParent,
    NonBiologicalParent,
    EggDonor,
    SpermDonor,
    SurrogateParent,
    AdoptiveParent,
    FosterParent,
    Godparent,
}

/// Which side of the genetic block a non-genetic kind is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindSide {
    Genetic,
    Left,
    Right,
}

impl RelationKind {
    pub const ALL: [RelationKind; 8] = [
        RelationKind::BiologicalParent,
        RelationKind::NonBiologicalParent,
        RelationKind::EggDonor,
        RelationKind::SpermDonor,
        RelationKind::SurrogateParent,
        RelationKind::AdoptiveParent,
        RelationKind::FosterParent,
        RelationKind::Godparent,
    ];

    /// Maximum number of parents of this kind a single child may have (`None` = unbounded).
    pub fn max_parents(self) -> Option<usize> {
        match self {
            Self::BiologicalParent | Self::NonBiologicalParent => Some(2),
            Self::EggDonor | Self::SpermDonor | Self::SurrogateParent => Some(1),
            Self::AdoptiveParent | Self::FosterParent | Self::Godparent => None,
        }
    }

    pub fn is_genetic(self) -> bool {
        matches!(self, Self::BiologicalParent | Self::EggDonor | Self::SpermDonor)
    }

    pub fn side(self) -> KindSide {
        match self {
            Self::BiologicalParent | Self::EggDonor | Self::SpermDonor => KindSide::Genetic,
            Self::NonBiologicalParent
            | Self::AdoptiveParent
            | Self::FosterParent
            | Self::Godparent => KindSide::Left,
            Self::SurrogateParent => KindSide::Right,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BiologicalParent => "biological_parent",
            Self::NonBiologicalParent => "non_biological_parent",
            Self::EggDonor => "egg_donor",
            Self::SpermDonor => "sperm_donor",
            Self::SurrogateParent => "surrogate_parent",
            Self::AdoptiveParent => "adoptive_parent",
            Self::FosterParent => "foster_parent",
            Self::Godparent => "godparent",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown relation kind `{0}`")]
pub struct ParseRelationKindError(String);

impl FromStr for RelationKind {
    type Err = ParseRelationKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseRelationKindError(s.to_owned()))
    }
}

/// One directed parent→child edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Relation {
    pub parent: PersonId,
    pub child: PersonId,
    pub kind: RelationKind,
}

impl Relation {
    pub fn new(parent: PersonId, child: PersonId, kind: RelationKind) -> Self {
        Self {
            parent,
            child,
            kind,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.parent, self.kind, self.child)
    }
}
