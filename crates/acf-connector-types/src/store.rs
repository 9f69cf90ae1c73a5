use serde_json::Value;

use crate::{FieldDefinition, FieldGroup};

/// Read access to the field-group definitions owned by the custom-fields
/// system.
pub trait FieldGroupStore: Send + Sync {
    /// Field groups bound to a block kind, in presentation order.
    fn field_groups_for_block(&self, block_kind: &str) -> Vec<FieldGroup>;

    /// The ordered fields of one group.
    fn fields(&self, group_id: &str) -> Vec<FieldDefinition>;
}

/// The content kinds the external schema currently exposes, and their
/// GraphQL type names.
pub trait ContentKindRegistry: Send + Sync {
    fn allowed_post_types(&self) -> Vec<String>;

    fn allowed_taxonomies(&self) -> Vec<String>;

    /// GraphQL type name of an exposed post type.
    fn post_type_name(&self, post_type: &str) -> Option<String>;

    /// GraphQL type name of an exposed taxonomy.
    fn taxonomy_type_name(&self, taxonomy: &str) -> Option<String>;
}

/// Reads one field's stored value for a block instance.
///
/// `object_id` and `attributes` establish the storage context (the CMS
/// object the block belongs to plus the block's raw attribute payload);
/// `key` is the field definition's stable key.
pub trait StoredValueSource: Send + Sync {
    fn field_value(&self, object_id: &str, attributes: &Value, key: &str) -> Option<Value>;
}

/// External transform applied once per field during block-value assembly.
/// The default is identity; hosts install one to post-process raw values.
pub trait ValueFilter: Send + Sync {
    fn filter(&self, value: Option<Value>, field: &FieldDefinition, type_name: &str) -> Option<Value>;
}
