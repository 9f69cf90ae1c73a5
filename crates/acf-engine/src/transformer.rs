use acf_registry::Transformer;
use serde_json::Value;

pub(crate) fn resolve(transformer: &Transformer, parent: &Value) -> Value {
    match transformer {
        Transformer::Select { key } => parent.get(key).cloned().unwrap_or(Value::Null),
        Transformer::FloatCoercion { key } => coerce_float(parent.get(key)),
    }
}

// Mirrors the storage layer's float coercion: empty and missing values are
// null, anything unparsable is 0.0.
fn coerce_float(value: Option<&Value>) -> Value {
    let Some(value) = value else {
        return Value::Null;
    };

    let parsed = match value {
        Value::Null => return Value::Null,
        Value::String(raw) if raw.is_empty() => return Value::Null,
        Value::String(raw) => raw.parse::<f64>().unwrap_or(0.0),
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        _ => 0.0,
    };

    serde_json::Number::from_f64(parsed).map(Value::Number).unwrap_or(Value::Null)
}
