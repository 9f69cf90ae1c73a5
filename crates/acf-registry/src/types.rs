use indexmap::IndexMap;

use crate::MetaField;

/// A type generated by the connector, registered under a name that is
/// globally unique for the lifetime of one schema build.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum MetaType {
    Object(ObjectType),
    Enum(EnumType),
    Union(UnionType),
    Scalar(ScalarType),
}

impl MetaType {
    pub fn name(&self) -> &str {
        match self {
            MetaType::Object(object) => &object.name,
            MetaType::Enum(enum_type) => &enum_type.name,
            MetaType::Union(union) => &union.name,
            MetaType::Scalar(scalar) => &scalar.name,
        }
    }

    pub fn fields(&self) -> Option<&IndexMap<String, MetaField>> {
        match self {
            MetaType::Object(object) => Some(&object.fields),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&MetaField> {
        self.fields().and_then(|fields| fields.get(name))
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            MetaType::Union(union) => Some(union),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, MetaField>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = MetaField>) -> ObjectType {
        ObjectType {
            name: name.into(),
            description: None,
            fields: fields.into_iter().map(|field| (field.name.clone(), field)).collect(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> ObjectType {
        self.description = Some(description.into());
        self
    }
}

/// An enum generated from a field's static choice list. Value names map back
/// to the raw stored values, which pass through resolution untouched.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EnumType {
    pub name: String,
    pub values: IndexMap<String, MetaEnumValue>,
}

impl EnumType {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = (String, MetaEnumValue)>) -> EnumType {
        EnumType {
            name: name.into(),
            values: values.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetaEnumValue {
    /// The raw stored value this enum member stands for.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UnionType {
    pub name: String,
    pub possible_types: Vec<String>,
    pub discriminator: Discriminator,
}

impl UnionType {
    pub fn new(
        name: impl Into<String>,
        possible_types: impl IntoIterator<Item = String>,
        discriminator: Discriminator,
    ) -> UnionType {
        UnionType {
            name: name.into(),
            possible_types: possible_types.into_iter().collect(),
            discriminator,
        }
    }
}

/// Data form of a union's member-selection function. The engine evaluates
/// it against a resolved value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Discriminator {
    /// Route by the raw content kind the reference resolver tags onto the
    /// loaded value under `__typename`.
    EntityKind(IndexMap<String, String>),
    /// Route by the per-record layout tag stored under `acf_fc_layout`.
    LayoutTag(IndexMap<String, String>),
}

/// A pass-through scalar: serialization is verbatim stringification of the
/// stored value, owned by the external execution engine.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> ScalarType {
        ScalarType {
            name: name.into(),
            description: None,
        }
    }
}

impl From<ObjectType> for MetaType {
    fn from(object: ObjectType) -> MetaType {
        MetaType::Object(object)
    }
}

impl From<EnumType> for MetaType {
    fn from(enum_type: EnumType) -> MetaType {
        MetaType::Enum(enum_type)
    }
}

impl From<UnionType> for MetaType {
    fn from(union: UnionType) -> MetaType {
        MetaType::Union(union)
    }
}

impl From<ScalarType> for MetaType {
    fn from(scalar: ScalarType) -> MetaType {
        MetaType::Scalar(scalar)
    }
}
