// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::ids::PersonId;

/// Opaque chronological sort key produced by the calendar subsystem.
///
/// Only the ordering matters here; the engine never interprets the value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ChronoKey(pub i64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    label: SmolStr,
    birth_key: Option<ChronoKey>,
}

impl Person {
    pub fn new(label: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            birth_key: None,
        }
    }

    pub fn with_birth_key(mut self, birth_key: Option<ChronoKey>) -> Self {
        self.birth_key = birth_key;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<SmolStr>) {
        self.label = label.into();
    }

    pub fn birth_key(&self) -> Option<ChronoKey> {
        self.birth_key
    }

    pub fn set_birth_key(&mut self, birth_key: Option<ChronoKey>) {
        self.birth_key = birth_key;
    }
}

/// Canonical person order: birth key (known keys first), then label, then id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonSortKey<'a> {
    pub birth_key: Option<ChronoKey>,
    pub label: &'a str,
    pub id: &'a PersonId,
}

impl Ord for PersonSortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_key = match (self.birth_key, other.birth_key) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_key
            .then_with(|| self.label.cmp(other.label))
            .then_with(|| self.id.cmp(other.id))
    }
}

impl PartialOrd for PersonSortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
