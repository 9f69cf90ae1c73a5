use acf_connector_types::{EntityNamespace, FieldDefinition};
use acf_registry::{Discriminator, MetaFieldType, ReferenceResolver, UnionType};
use indexmap::IndexMap;
use itertools::Itertools;

use super::FieldConfig;
use crate::{names, Context};

/// Collapses a raw-kind -> GraphQL-type mapping into a single type or a
/// union.
///
/// Zero targets produce nothing. Exactly one target is used directly, no
/// union. Two or more register a union named `type_name` whose
/// discriminator routes a resolved value's kind tag back to the member
/// type.
pub(super) fn maybe_union_type(
    ctx: &mut Context<'_>,
    targets: &IndexMap<String, String>,
    type_name: &str,
    discriminator: fn(IndexMap<String, String>) -> Discriminator,
) -> Option<String> {
    match targets.len() {
        0 => None,
        1 => targets.values().next().cloned(),
        _ => {
            ctx.register_type(UnionType::new(
                type_name,
                targets.values().cloned().unique().collect::<Vec<_>>(),
                discriminator(targets.clone()),
            ));

            Some(type_name.to_string())
        }
    }
}

pub(super) fn post_object(
    ctx: &mut Context<'_>,
    field: &FieldDefinition,
    name_base: &str,
    allow_only: &[String],
    multiple: bool,
) -> Option<FieldConfig> {
    let mut targets = IndexMap::new();
    for post_type in ctx.kinds.allowed_post_types() {
        if !allow_only.is_empty() && !allow_only.contains(&post_type) {
            continue;
        }

        if let Some(type_name) = ctx.kinds.post_type_name(&post_type) {
            targets.insert(post_type, type_name);
        }
    }

    let union_name = names::format_name(&field.name, name_base);
    let Some(ty) = maybe_union_type(ctx, &targets, &union_name, Discriminator::EntityKind) else {
        ctx.push_warning(format!(
            "field {} has no resolvable target post types (allow-list: [{}])",
            field.key,
            allow_only.iter().join(", "),
        ));
        return None;
    };

    Some(reference_config(ty, EntityNamespace::Post, multiple, field))
}

pub(super) fn taxonomy(
    ctx: &mut Context<'_>,
    field: &FieldDefinition,
    name_base: &str,
    taxonomy: &str,
    multiple: bool,
) -> Option<FieldConfig> {
    let mut targets = IndexMap::new();
    if ctx.kinds.allowed_taxonomies().iter().any(|allowed| allowed == taxonomy) {
        if let Some(type_name) = ctx.kinds.taxonomy_type_name(taxonomy) {
            targets.insert(taxonomy.to_string(), type_name);
        }
    }

    let union_name = names::format_name(&field.name, name_base);
    let Some(ty) = maybe_union_type(ctx, &targets, &union_name, Discriminator::EntityKind) else {
        ctx.push_warning(format!(
            "field {} references taxonomy {taxonomy}, which is not exposed in the schema",
            field.key,
        ));
        return None;
    };

    Some(reference_config(ty, EntityNamespace::Term, multiple, field))
}

pub(super) fn user(ctx: &mut Context<'_>, field: &FieldDefinition, multiple: bool) -> FieldConfig {
    reference_config(ctx.config.user_type_name.clone(), EntityNamespace::User, multiple, field)
}

pub(super) fn media(ctx: &mut Context<'_>, field: &FieldDefinition, multiple: bool) -> FieldConfig {
    reference_config(ctx.config.media_type_name.clone(), EntityNamespace::Media, multiple, field)
}

/// Galleries are list-valued with non-null items, unlike the other
/// multi-valued references.
pub(super) fn gallery(ctx: &mut Context<'_>, field: &FieldDefinition) -> FieldConfig {
    let ty = MetaFieldType::named(ctx.config.media_type_name.clone()).non_null().list_of();

    FieldConfig::new(ty).with_resolver(ReferenceResolver {
        namespace: EntityNamespace::Media,
        multiple: true,
        field_key: field.key.clone(),
    })
}

fn reference_config(type_name: String, namespace: EntityNamespace, multiple: bool, field: &FieldDefinition) -> FieldConfig {
    let ty = if multiple {
        MetaFieldType::named(type_name).list_of()
    } else {
        MetaFieldType::named(type_name)
    };

    FieldConfig::new(ty).with_resolver(ReferenceResolver {
        namespace,
        multiple,
        field_key: field.key.clone(),
    })
}
