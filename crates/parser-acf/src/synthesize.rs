mod choice;
mod composite;
mod reference;
mod scalar;

use acf_connector_types::{FieldDefinition, FieldKind};
use acf_registry::{MetaField, MetaFieldType, MetaInputValue, ObjectType, Resolver};
use indexmap::IndexMap;

use crate::{names, Context};

/// Everything a synthesizer decides about one field: the GraphQL type
/// reference plus the resolver and arguments bound to it. The field name is
/// attached when the parent object type is assembled.
pub(crate) struct FieldConfig {
    pub(crate) ty: MetaFieldType,
    pub(crate) resolver: Resolver,
    pub(crate) args: Vec<MetaInputValue>,
}

impl FieldConfig {
    pub(crate) fn new(ty: impl Into<MetaFieldType>) -> FieldConfig {
        FieldConfig {
            ty: ty.into(),
            resolver: Resolver::Parent,
            args: Vec::new(),
        }
    }

    pub(crate) fn with_resolver(mut self, resolver: impl Into<Resolver>) -> FieldConfig {
        self.resolver = resolver.into();
        self
    }

    pub(crate) fn with_args(mut self, args: impl IntoIterator<Item = MetaInputValue>) -> FieldConfig {
        self.args = args.into_iter().collect();
        self
    }
}

/// Dispatches one validated field to its synthesizer. `None` means the
/// field produces no schema surface and is omitted from the parent type.
pub(crate) fn field_config(ctx: &mut Context<'_>, field: &FieldDefinition, name_base: &str) -> Option<FieldConfig> {
    match &field.kind {
        FieldKind::Text
        | FieldKind::Textarea
        | FieldKind::Email
        | FieldKind::Url
        | FieldKind::Password
        | FieldKind::Wysiwyg
        | FieldKind::Message => Some(FieldConfig::new("String")),
        FieldKind::Oembed => Some(scalar::oembed()),
        FieldKind::Number | FieldKind::Range => Some(FieldConfig::new("Float")),
        FieldKind::TrueFalse => Some(FieldConfig::new("Boolean")),
        FieldKind::Select { choices, multiple } => Some(choice::synthesize(ctx, field, name_base, choices, *multiple)),
        FieldKind::Checkbox { choices } => Some(choice::synthesize(ctx, field, name_base, choices, true)),
        FieldKind::ButtonGroup { choices } | FieldKind::Radio { choices } => {
            Some(choice::synthesize(ctx, field, name_base, choices, false))
        }
        FieldKind::File { multiple } | FieldKind::Image { multiple } => Some(reference::media(ctx, field, *multiple)),
        FieldKind::Gallery => Some(reference::gallery(ctx, field)),
        FieldKind::PageLink { multiple } => Some(scalar::page_link(*multiple)),
        FieldKind::Link => Some(scalar::link(ctx)),
        FieldKind::GoogleMap => Some(scalar::google_map(ctx)),
        FieldKind::DatePicker => Some(scalar::date(ctx)),
        FieldKind::TimePicker => Some(scalar::time(ctx)),
        FieldKind::DateTimePicker => Some(scalar::datetime(ctx)),
        FieldKind::ColorPicker => Some(scalar::color(ctx)),
        FieldKind::PostObject { post_types, multiple } => {
            reference::post_object(ctx, field, name_base, post_types, *multiple)
        }
        FieldKind::Relationship { post_types } => reference::post_object(ctx, field, name_base, post_types, true),
        FieldKind::Taxonomy { taxonomy, field_type } => {
            reference::taxonomy(ctx, field, name_base, taxonomy, field_type.is_multiple())
        }
        FieldKind::User { multiple } => Some(reference::user(ctx, field, *multiple)),
        FieldKind::Repeater { sub_fields } => composite::repeater(ctx, field, name_base, sub_fields),
        FieldKind::Group { sub_fields } => composite::group(ctx, field, name_base, sub_fields),
        FieldKind::FlexibleContent { layouts } => composite::flexible_content(ctx, field, name_base, layouts),
    }
}

/// Compiles an ordered field list into one object type named `name_base`.
///
/// Fields with unusable names are skipped with a warning; fields whose
/// synthesizer produces nothing are omitted. Returns the registered type
/// name, or `None` when no field survived; callers omit the parent field
/// entirely in that case, they do not treat it as an error.
pub fn compile_fields(ctx: &mut Context<'_>, fields: &[FieldDefinition], name_base: &str) -> Option<String> {
    let mut compiled: IndexMap<String, MetaField> = IndexMap::new();

    for field in fields {
        if !names::is_field_name_valid(&field.name) {
            ctx.push_warning(format!(
                "field {} name {:?} for type {name_base} is unsupported",
                field.key, field.name,
            ));
            continue;
        }

        if let Some(config) = field_config(ctx, field, name_base) {
            let meta_field = MetaField::new(field.name.clone(), config.ty)
                .with_resolver(config.resolver)
                .with_args(config.args);

            compiled.insert(field.name.clone(), meta_field);
        }
    }

    if compiled.is_empty() {
        return None;
    }

    ctx.register_type(ObjectType::new(name_base, compiled.into_values()));

    Some(name_base.to_string())
}
