use serde_json::Value;
use std::borrow::Cow;
use validator::ValidationError;
use crate::validators::create_validation_error;

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(value: &Value, code: &'static str, msg: &'static str) -> ValidationError {
    let mut validation_error = create_validation_error(code, msg);
    validation_error.add_param(Cow::from("actual"), &type_name(value));
    validation_error
}

pub fn validate_string(
    value: &Value,
    code: &'static str,
    msg: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Value::String(_) => Ok(()),
        _ => Err(type_mismatch(value, code, msg)),
    }
}

pub fn validate_number(
    value: &Value,
    code: &'static str,
    msg: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Value::Number(_) => Ok(()),
        _ => Err(type_mismatch(value, code, msg)),
    }
}

#[test]
fn validate_string_returns_ok() {
    assert_eq!(
        validate_string(&json!("Verena Nardi"), "test_example", "test example"),
        Ok(())
    );
}

#[test]
fn validate_string_returns_err() {
    let result = validate_string(&json!(22), "test_example", "test example");
    match result {
        Ok(_) => panic!("Unexpected Ok result"),
        Err(e) => {
            assert_eq!(e.code, "test_example");
            assert_eq!(e.params["actual"], json!("number"));
        }
    }
}

#[test]
fn validate_number_returns_ok() {
    assert_eq!(validate_number(&json!(22), "test_example", "test example"), Ok(()));
    assert_eq!(validate_number(&json!(2.5), "test_example", "test example"), Ok(()));
}

#[test]
fn validate_number_returns_err() {
    let result = validate_number(&json!("22"), "test_example", "test example");
    match result {
        Ok(_) => panic!("Unexpected Ok result"),
        Err(e) => {
            assert_eq!(e.code, "test_example");
            assert_eq!(e.params["actual"], json!("string"));
        }
    }
}
