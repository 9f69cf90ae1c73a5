use acf_connector_types::{FieldDefinition, LayoutDefinition};
use acf_registry::{Discriminator, MetaFieldType};
use indexmap::IndexMap;

use super::{compile_fields, reference, FieldConfig};
use crate::{names, Context};

pub(super) fn group(
    ctx: &mut Context<'_>,
    field: &FieldDefinition,
    name_base: &str,
    sub_fields: &[FieldDefinition],
) -> Option<FieldConfig> {
    let type_name = names::format_name(&field.name, name_base);
    let ty = compile_fields(ctx, sub_fields, &type_name)?;

    Some(FieldConfig::new(ty))
}

/// Repeater values are lists of the composite type; an empty repeater
/// instance yields an empty list at runtime, never null.
pub(super) fn repeater(
    ctx: &mut Context<'_>,
    field: &FieldDefinition,
    name_base: &str,
    sub_fields: &[FieldDefinition],
) -> Option<FieldConfig> {
    let type_name = names::format_name(&field.name, name_base);
    let ty = compile_fields(ctx, sub_fields, &type_name)?;

    Some(FieldConfig::new(MetaFieldType::named(ty).non_null().list_of()))
}

/// Every valid layout compiles into its own object type; the layout types
/// collapse into a single type or a union discriminated by the stored
/// per-record layout tag. A flexible field with no usable layout is
/// omitted.
pub(super) fn flexible_content(
    ctx: &mut Context<'_>,
    field: &FieldDefinition,
    name_base: &str,
    layouts: &[LayoutDefinition],
) -> Option<FieldConfig> {
    let mut types_per_layout = IndexMap::new();

    for layout in layouts {
        if !names::is_field_name_valid(&layout.name) {
            ctx.push_warning(format!(
                "layout {} name {:?} in flexible content field {} for type {name_base} is unsupported",
                layout.key, layout.name, field.key,
            ));
            continue;
        }

        let layout_type_name = names::format_name(&layout.name, name_base);
        if let Some(ty) = compile_fields(ctx, &layout.sub_fields, &layout_type_name) {
            types_per_layout.insert(layout.name.clone(), ty);
        }
    }

    if types_per_layout.is_empty() {
        return None;
    }

    let union_name = names::format_name(&field.name, name_base);
    let ty = reference::maybe_union_type(ctx, &types_per_layout, &union_name, Discriminator::LayoutTag)?;

    Some(FieldConfig::new(MetaFieldType::named(ty).list_of()))
}
