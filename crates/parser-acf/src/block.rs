use acf_connector_types::{FieldDefinition, FieldGroupStore};
use acf_registry::{BlockFieldsResolver, MetaField};
use indexmap::IndexMap;

use crate::{names, synthesize, Context};

/// Augments one block kind's GraphQL fields with its compiled custom
/// fields.
///
/// This is the hook the host invokes once per block kind during schema
/// build: given the block's default field set, it extends the set with a
/// single attachment field when the block kind carries the configured
/// namespace prefix and its field groups compile to a type. Field groups
/// are flattened in store order before compilation.
pub fn extend_block_type_fields(
    ctx: &mut Context<'_>,
    store: &dyn FieldGroupStore,
    block_kind: &str,
    fields: &mut IndexMap<String, MetaField>,
) {
    if !block_kind.starts_with(&ctx.config.block_namespace) {
        return;
    }

    let acf_fields: Vec<FieldDefinition> = store
        .field_groups_for_block(block_kind)
        .iter()
        .flat_map(|group| store.fields(&group.id))
        .collect();

    let type_name = names::format_block_fields_type_name(block_kind);

    let Some(ty) = synthesize::compile_fields(ctx, &acf_fields, &type_name) else {
        return;
    };

    let attachment = ctx.config.attachment_field.clone();
    fields.insert(
        attachment.clone(),
        MetaField::new(attachment, ty).with_resolver(BlockFieldsResolver {
            type_name,
            fields: acf_fields,
        }),
    );
}
