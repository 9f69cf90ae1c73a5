use acf_registry::BlockFieldsResolver;
use serde_json::{Map, Value};

use crate::ResolverContext;

/// Assembles the attachment field's value for one block instance: the
/// stored value of every captured field, keyed by field name, with the
/// host's value filter applied per field.
pub(crate) fn resolve(ctx: &ResolverContext<'_>, resolver: &BlockFieldsResolver, block: &Value) -> Value {
    let attributes = block.get("attributes");
    let object_id = attributes
        .and_then(|attributes| attributes.get("id"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    let data = attributes
        .and_then(|attributes| attributes.get("data"))
        .cloned()
        .unwrap_or(Value::Null);

    let mut out = Map::new();
    for field in &resolver.fields {
        let mut value = ctx.values.field_value(object_id, &data, &field.key);

        if let Some(filter) = ctx.value_filter {
            value = filter.filter(value, field, &resolver.type_name);
        }

        out.insert(field.name.clone(), value.unwrap_or(Value::Null));
    }

    Value::Object(out)
}
