use std::fmt;

/// A GraphQL type reference as it appears in SDL: a named type plus optional
/// list and non-null wrappers, e.g. `[AcfHeroSlide!]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MetaFieldType(String);

impl MetaFieldType {
    pub fn named(name: impl Into<String>) -> MetaFieldType {
        MetaFieldType(name.into())
    }

    /// `T` -> `[T]`
    pub fn list_of(self) -> MetaFieldType {
        MetaFieldType(format!("[{}]", self.0))
    }

    /// `T` -> `T!`
    pub fn non_null(self) -> MetaFieldType {
        MetaFieldType(format!("{}!", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_list(&self) -> bool {
        self.0.starts_with('[')
    }

    /// The innermost named type, with every wrapper stripped.
    pub fn base_type_name(&self) -> &str {
        self.0.trim_start_matches('[').trim_end_matches(['!', ']'])
    }
}

impl From<&str> for MetaFieldType {
    fn from(name: &str) -> Self {
        MetaFieldType(name.to_string())
    }
}

impl From<String> for MetaFieldType {
    fn from(name: String) -> Self {
        MetaFieldType(name)
    }
}

impl fmt::Display for MetaFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
