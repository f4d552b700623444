//! Argument validation and scalar coercion.

use std::collections::HashMap;

use pokedex_core::Value;
use serde_json::{Map, Value as Json};

use crate::error::{GatewayError, GatewayResult};
use crate::ops::{OperationDef, Scalar};

/// Coerced arguments for one dispatch, keyed by declared parameter name.
pub type Arguments = HashMap<&'static str, Value>;

/// Validate incoming argument names against the operation's declaration
/// and coerce each value to its declared scalar. JSON null counts as an
/// absent argument.
pub fn coerce_arguments(
    def: &'static OperationDef,
    raw: &Map<String, Json>,
) -> GatewayResult<Arguments> {
    let mut arguments = Arguments::new();
    for (name, value) in raw {
        let param = def
            .params
            .iter()
            .find(|p| p.name == name.as_str())
            .ok_or_else(|| GatewayError::unknown_argument(def.name, name))?;

        if value.is_null() {
            continue;
        }
        arguments.insert(param.name, coerce_scalar(param.name, param.scalar, value)?);
    }
    Ok(arguments)
}

fn coerce_scalar(name: &str, scalar: Scalar, value: &Json) -> GatewayResult<Value> {
    match scalar {
        Scalar::String => value
            .as_str()
            .map(Value::from)
            .ok_or_else(|| mismatch(name, scalar, value)),
        Scalar::Int => value
            .as_i64()
            .map(Value::Int)
            .ok_or_else(|| mismatch(name, scalar, value)),
        // Ints widen to Float; everything else is a mismatch.
        Scalar::Float => value
            .as_f64()
            .map(Value::Float)
            .ok_or_else(|| mismatch(name, scalar, value)),
    }
}

fn mismatch(name: &str, scalar: Scalar, value: &Json) -> GatewayError {
    GatewayError::type_coercion(name, scalar.type_name(), json_type_name(value))
}

fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::operation;
    use serde_json::json;

    fn raw(value: Json) -> Map<String, Json> {
        match value {
            Json::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_coerces_declared_scalars() {
        let def = operation("addAttack").unwrap();
        let args = coerce_arguments(
            def,
            &raw(json!({"fastOrSpecial": "fast", "name": "Ember", "damage": 10})),
        )
        .unwrap();

        assert_eq!(args.get("fastOrSpecial"), Some(&Value::String("fast".into())));
        assert_eq!(args.get("damage"), Some(&Value::Int(10)));
    }

    #[test]
    fn test_rejects_unknown_argument() {
        let def = operation("Pokemon").unwrap();
        let err = coerce_arguments(def, &raw(json!({"nickname": "Sparky"})));
        assert!(matches!(err, Err(GatewayError::UnknownArgument { .. })));
    }

    #[test]
    fn test_rejects_uncoercible_value() {
        let def = operation("addAttack").unwrap();
        let err = coerce_arguments(def, &raw(json!({"damage": "ten"})));
        assert!(matches!(err, Err(GatewayError::TypeCoercion { .. })));

        let err = coerce_arguments(def, &raw(json!({"name": 7})));
        assert!(matches!(err, Err(GatewayError::TypeCoercion { .. })));
    }

    #[test]
    fn test_null_is_absent() {
        let def = operation("Pokemon").unwrap();
        let args = coerce_arguments(def, &raw(json!({"id": null, "name": "Pikachu"}))).unwrap();
        assert!(!args.contains_key("id"));
        assert!(args.contains_key("name"));
    }
}
