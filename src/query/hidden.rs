// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::resolver::{QueryError, Resolver};
use crate::model::PersonId;

/// What a layout already shows around one person.
#[derive(Debug, Clone, Copy)]
pub struct HiddenRelatives<'s> {
    /// Ancestor expansion stopped at this person because the depth budget ran out.
    pub level_budget_exhausted: bool,
    pub visible_children: &'s BTreeSet<PersonId>,
    pub min_visible_partners: usize,
}

impl Resolver<'_> {
    /// Whether `person` has relatives the current layout does not show.
    ///
    /// Only compares already-known sets; it never expands the layout.
    pub fn has_hidden_relatives(
        &self,
        person: &PersonId,
        shown: &HiddenRelatives<'_>,
    ) -> Result<bool, QueryError> {
        if shown.level_budget_exhausted && !self.genetic_parents(person)?.is_empty() {
            return Ok(true);
        }
        if self.partners_of(person)?.len() > shown.min_visible_partners {
            return Ok(true);
        }
        Ok(self
            .all_children(person)?
            .iter()
            .any(|child| !shown.visible_children.contains(child)))
    }
}
