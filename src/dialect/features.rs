//! Feature flags consulted by DDL-generation collaborators

use serde::Serialize;

/// Resolved feature flags of one dialect profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialectFeatures {
    pub supports_sequence: bool,
    pub supports_cascade_delete: bool,
    /// Column clause declaring an identity column; `None` when the dialect
    /// has no identity columns
    pub identity_syntax: Option<&'static str>,
    pub supports_boolean: bool,
    /// `DROP ... IF EXISTS`
    pub supports_if_exists: bool,
    /// `CREATE OR REPLACE` (or `CREATE OR ALTER`)
    pub supports_create_or_replace: bool,
    pub supports_check_constraints: bool,
    pub supports_schemas: bool,
    /// `COMMENT ON TABLE/COLUMN`
    pub supports_comment_on: bool,
    /// `INSERT ... RETURNING`
    pub supports_returning: bool,
    pub supports_merge: bool,
    pub max_identifier_length: u32,
}

impl Default for DialectFeatures {
    fn default() -> Self {
        Self {
            supports_sequence: false,
            supports_cascade_delete: true,
            identity_syntax: None,
            supports_boolean: false,
            supports_if_exists: false,
            supports_create_or_replace: false,
            supports_check_constraints: true,
            supports_schemas: true,
            supports_comment_on: false,
            supports_returning: false,
            supports_merge: false,
            max_identifier_length: 128,
        }
    }
}

/// Flags a version profile changes relative to the next profile in its chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDelta {
    pub supports_sequence: Option<bool>,
    pub supports_cascade_delete: Option<bool>,
    pub identity_syntax: Option<Option<&'static str>>,
    pub supports_boolean: Option<bool>,
    pub supports_if_exists: Option<bool>,
    pub supports_create_or_replace: Option<bool>,
    pub supports_check_constraints: Option<bool>,
    pub supports_schemas: Option<bool>,
    pub supports_comment_on: Option<bool>,
    pub supports_returning: Option<bool>,
    pub supports_merge: Option<bool>,
    pub max_identifier_length: Option<u32>,
}

impl FeatureDelta {
    /// Changes nothing
    pub const NONE: FeatureDelta = FeatureDelta {
        supports_sequence: None,
        supports_cascade_delete: None,
        identity_syntax: None,
        supports_boolean: None,
        supports_if_exists: None,
        supports_create_or_replace: None,
        supports_check_constraints: None,
        supports_schemas: None,
        supports_comment_on: None,
        supports_returning: None,
        supports_merge: None,
        max_identifier_length: None,
    };

    /// Overlay this delta on inherited flags
    pub fn apply(&self, inherited: DialectFeatures) -> DialectFeatures {
        DialectFeatures {
            supports_sequence: self.supports_sequence.unwrap_or(inherited.supports_sequence),
            supports_cascade_delete: self
                .supports_cascade_delete
                .unwrap_or(inherited.supports_cascade_delete),
            identity_syntax: self.identity_syntax.unwrap_or(inherited.identity_syntax),
            supports_boolean: self.supports_boolean.unwrap_or(inherited.supports_boolean),
            supports_if_exists: self.supports_if_exists.unwrap_or(inherited.supports_if_exists),
            supports_create_or_replace: self
                .supports_create_or_replace
                .unwrap_or(inherited.supports_create_or_replace),
            supports_check_constraints: self
                .supports_check_constraints
                .unwrap_or(inherited.supports_check_constraints),
            supports_schemas: self.supports_schemas.unwrap_or(inherited.supports_schemas),
            supports_comment_on: self
                .supports_comment_on
                .unwrap_or(inherited.supports_comment_on),
            supports_returning: self.supports_returning.unwrap_or(inherited.supports_returning),
            supports_merge: self.supports_merge.unwrap_or(inherited.supports_merge),
            max_identifier_length: self
                .max_identifier_length
                .unwrap_or(inherited.max_identifier_length),
        }
    }
}
