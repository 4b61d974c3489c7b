// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{ChronoKey, FamilyTree, IdError, PersonId, RelationKind};
use crate::ops::{apply_ops, ApplyError, TreeOp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PersonRecord {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_key: Option<ChronoKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RelationRecord {
    pub parent: String,
    pub child: String,
    pub kind: RelationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PartnerRecord {
    pub a: String,
    pub b: String,
}

/// A whole family tree as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FamilyDocument {
    #[serde(default)]
    pub persons: Vec<PersonRecord>,
    #[serde(default)]
    pub relations: Vec<RelationRecord>,
    #[serde(default)]
    pub partners: Vec<PartnerRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read family document {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse family document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid person id {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: IdError,
    },
    #[error("family document is inconsistent: {0}")]
    Apply(#[from] ApplyError),
}

fn person_id(value: &str) -> Result<PersonId, DocumentError> {
    PersonId::new(value).map_err(|source| DocumentError::InvalidId {
        value: value.to_owned(),
        source,
    })
}

impl FamilyDocument {
    pub fn from_json(src: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&src)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The edit batch that builds this document from an empty tree.
    pub fn to_ops(&self) -> Result<Vec<TreeOp>, DocumentError> {
        let mut ops = Vec::with_capacity(
            self.persons.len() + self.relations.len() + self.partners.len() + 1,
        );
        for record in &self.persons {
            ops.push(TreeOp::AddPerson {
                id: person_id(&record.id)?,
                label: record.label.clone(),
                birth_key: record.birth_key,
            });
        }
        for record in &self.relations {
            ops.push(TreeOp::AddRelation {
                parent: person_id(&record.parent)?,
                child: person_id(&record.child)?,
                kind: record.kind,
            });
        }
        for record in &self.partners {
            ops.push(TreeOp::DeclarePartners {
                a: person_id(&record.a)?,
                b: person_id(&record.b)?,
            });
        }
        if let Some(root) = &self.root {
            ops.push(TreeOp::SetRoot {
                id: Some(person_id(root)?),
            });
        }
        Ok(ops)
    }

    /// Builds a tree, validating every record against the store rules.
    pub fn to_tree(&self) -> Result<FamilyTree, DocumentError> {
        let ops = self.to_ops()?;
        let mut tree = FamilyTree::new();
        let base_rev = tree.rev();
        let result = apply_ops(&mut tree, base_rev, &ops)?;
        tracing::debug!(
            persons = result.delta.added.len(),
            relations = result.delta.relations_added.len(),
            "family document loaded"
        );
        Ok(tree)
    }

    /// Exports `tree` in canonical order (persons and relations by id).
    pub fn from_tree(tree: &FamilyTree) -> Self {
        Self {
            persons: tree
                .people()
                .iter()
                .map(|(id, person)| PersonRecord {
                    id: id.to_string(),
                    label: person.label().to_owned(),
                    birth_key: person.birth_key(),
                })
                .collect(),
            relations: tree
                .relations()
                .edges()
                .map(|relation| RelationRecord {
                    parent: relation.parent.to_string(),
                    child: relation.child.to_string(),
                    kind: relation.kind,
                })
                .collect(),
            partners: tree
                .unions()
                .iter()
                .map(|union| PartnerRecord {
                    a: union.first().to_string(),
                    b: union.second().to_string(),
                })
                .collect(),
            root: tree.root().map(ToString::to_string),
        }
    }
}
