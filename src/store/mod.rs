// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Relation storage.
//!
//! The store keeps typed parent→child edges with both lookup directions in lock-step and
//! enforces per-kind parent capacities. It has no algorithms beyond that invariant.

pub mod relations;

pub use relations::{RelationStore, StoreError};
