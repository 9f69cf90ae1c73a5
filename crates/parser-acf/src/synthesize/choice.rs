use acf_connector_types::FieldDefinition;
use acf_registry::{EnumType, MetaEnumValue, MetaFieldType};
use indexmap::IndexMap;

use super::FieldConfig;
use crate::{names, Context};

/// Builds the enum for a choice field.
///
/// A raw choice value that is itself a usable name becomes the enum member
/// verbatim, original casing preserved. Anything else (numeric, empty, ...)
/// falls back to the upper-cased *field* name plus the raw value, which is
/// always a usable member name. Stored values pass through resolution
/// without being checked against the declared choice set.
pub(super) fn synthesize(
    ctx: &mut Context<'_>,
    field: &FieldDefinition,
    name_base: &str,
    choices: &IndexMap<String, String>,
    multiple: bool,
) -> FieldConfig {
    let type_name = names::format_name(&field.name, name_base);

    let mut values = IndexMap::new();
    for raw_value in choices.keys() {
        let member = if names::is_field_name_valid(raw_value) {
            raw_value.clone()
        } else {
            format!("{}_{raw_value}", field.name.to_uppercase())
        };

        values.insert(
            member,
            MetaEnumValue {
                value: raw_value.clone(),
            },
        );
    }

    ctx.register_type(EnumType::new(type_name.clone(), values));

    let ty = if multiple {
        MetaFieldType::named(type_name).non_null().list_of()
    } else {
        MetaFieldType::named(type_name)
    };

    FieldConfig::new(ty)
}
