use indexmap::IndexMap;

use crate::{MetaFieldType, Resolver};

/// A field of a generated object type.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetaField {
    pub name: String,
    pub description: Option<String>,
    pub args: IndexMap<String, MetaInputValue>,
    pub ty: MetaFieldType,
    #[serde(skip_serializing_if = "Resolver::is_parent", default)]
    pub resolver: Resolver,
}

impl MetaField {
    pub fn new(name: impl Into<String>, ty: impl Into<MetaFieldType>) -> MetaField {
        MetaField {
            name: name.into(),
            ty: ty.into(),
            ..Default::default()
        }
    }

    pub fn with_resolver(mut self, resolver: impl Into<Resolver>) -> MetaField {
        self.resolver = resolver.into();
        self
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = MetaInputValue>) -> MetaField {
        self.args = args.into_iter().map(|arg| (arg.name.clone(), arg)).collect();
        self
    }
}

/// An argument of a generated field.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetaInputValue {
    pub name: String,
    pub description: Option<String>,
    pub ty: MetaFieldType,
}

impl MetaInputValue {
    pub fn new(name: impl Into<String>, ty: impl Into<MetaFieldType>) -> MetaInputValue {
        MetaInputValue {
            name: name.into(),
            description: None,
            ty: ty.into(),
        }
    }
}
