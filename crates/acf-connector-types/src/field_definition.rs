use indexmap::IndexMap;

/// A named collection of field definitions attachable to one or more block
/// kinds.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldGroup {
    pub id: String,
    pub title: String,
}

/// A single field definition as authored in the custom-fields admin.
///
/// Owned by the external CMS, read-only here. `name` must be non-empty and
/// non-numeric to be usable as a GraphQL field name; fields violating this
/// are dropped by the parser with a diagnostic, never silently renamed.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldDefinition {
    /// Opaque stable identifier, unique within the CMS.
    pub key: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Every field kind the connector understands, with its kind-specific
/// attributes. A closed set: adding a kind is a source change, and the
/// parser dispatch is checked exhaustive at compile time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Url,
    Password,
    Wysiwyg,
    Message,
    Oembed,
    Number,
    Range,
    TrueFalse,
    Select {
        /// Ordered raw value -> label mapping.
        #[serde(default)]
        choices: IndexMap<String, String>,
        #[serde(default)]
        multiple: bool,
    },
    /// Checkbox choices are always multi-valued.
    Checkbox {
        #[serde(default)]
        choices: IndexMap<String, String>,
    },
    ButtonGroup {
        #[serde(default)]
        choices: IndexMap<String, String>,
    },
    Radio {
        #[serde(default)]
        choices: IndexMap<String, String>,
    },
    File {
        #[serde(default)]
        multiple: bool,
    },
    Image {
        #[serde(default)]
        multiple: bool,
    },
    /// Galleries are always multi-valued.
    Gallery,
    PageLink {
        #[serde(default)]
        multiple: bool,
    },
    Link,
    GoogleMap,
    DatePicker,
    TimePicker,
    DateTimePicker,
    ColorPicker,
    PostObject {
        /// Allow-list of target post types; empty means every exposed kind.
        #[serde(default)]
        post_types: Vec<String>,
        #[serde(default)]
        multiple: bool,
    },
    /// Relationships are always multi-valued.
    Relationship {
        #[serde(default)]
        post_types: Vec<String>,
    },
    Taxonomy {
        taxonomy: String,
        #[serde(default)]
        field_type: TaxonomyFieldType,
    },
    User {
        #[serde(default)]
        multiple: bool,
    },
    Repeater {
        #[serde(default)]
        sub_fields: Vec<FieldDefinition>,
    },
    Group {
        #[serde(default)]
        sub_fields: Vec<FieldDefinition>,
    },
    FlexibleContent {
        #[serde(default)]
        layouts: Vec<LayoutDefinition>,
    },
}

/// Widget variant of a taxonomy field. Determines multiplicity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyFieldType {
    #[default]
    Select,
    MultiSelect,
    Checkbox,
    Radio,
}

impl TaxonomyFieldType {
    pub fn is_multiple(self) -> bool {
        matches!(self, TaxonomyFieldType::MultiSelect | TaxonomyFieldType::Checkbox)
    }
}

/// One layout of a flexible content field. Layout names obey the same
/// validity rule as field names.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutDefinition {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub sub_fields: Vec<FieldDefinition>,
}
