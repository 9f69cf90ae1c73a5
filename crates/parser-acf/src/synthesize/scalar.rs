use acf_registry::{MetaFieldType, MetaInputValue, Resolver};

use super::FieldConfig;
use crate::Context;

pub(super) fn oembed() -> FieldConfig {
    FieldConfig::new("String").with_resolver(Resolver::Oembed).with_args([
        MetaInputValue::new("width", "Int"),
        MetaInputValue::new("height", "Int"),
    ])
}

pub(super) fn page_link(multiple: bool) -> FieldConfig {
    let ty = if multiple {
        MetaFieldType::named("String").non_null().list_of()
    } else {
        MetaFieldType::named("String")
    };

    FieldConfig::new(ty).with_resolver(Resolver::Permalink { multiple })
}

pub(super) fn link(ctx: &mut Context<'_>) -> FieldConfig {
    FieldConfig::new(ctx.leaf_types.link(&mut *ctx.registry))
}

pub(super) fn google_map(ctx: &mut Context<'_>) -> FieldConfig {
    FieldConfig::new(ctx.leaf_types.google_map(&mut *ctx.registry))
}

pub(super) fn date(ctx: &mut Context<'_>) -> FieldConfig {
    FieldConfig::new(ctx.leaf_types.date(&mut *ctx.registry))
}

pub(super) fn time(ctx: &mut Context<'_>) -> FieldConfig {
    FieldConfig::new(ctx.leaf_types.time(&mut *ctx.registry))
}

pub(super) fn datetime(ctx: &mut Context<'_>) -> FieldConfig {
    FieldConfig::new(ctx.leaf_types.datetime(&mut *ctx.registry))
}

pub(super) fn color(ctx: &mut Context<'_>) -> FieldConfig {
    FieldConfig::new(ctx.leaf_types.color(&mut *ctx.registry))
}
