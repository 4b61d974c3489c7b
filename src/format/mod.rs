// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON interchange: the on-disk family document and the layout schema.

pub mod document;

pub use document::{DocumentError, FamilyDocument, PartnerRecord, PersonRecord, RelationRecord};

use crate::layout::LayoutResult;

/// JSON schema of [`LayoutResult`], for render adapters.
pub fn layout_schema() -> serde_json::Value {
    schemars::schema_for!(LayoutResult).to_value()
}

/// JSON schema of [`FamilyDocument`].
pub fn document_schema() -> serde_json::Value {
    schemars::schema_for!(FamilyDocument).to_value()
}
