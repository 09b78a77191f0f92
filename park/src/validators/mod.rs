mod type_validators;

pub(crate) use self::type_validators::type_name;
pub use self::type_validators::{validate_number, validate_string};
use std::borrow::Cow;
use validator::*;

pub fn create_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(Cow::from(message));
    validation_error
}

pub fn append_validation_error(
    validation_errors: Result<(), ValidationErrors>,
    field: &'static str,
    validation_error: Result<(), ValidationError>,
) -> Result<(), ValidationErrors> {
    if let Err(validation_error) = validation_error {
        let mut validation_errors = match validation_errors {
            Ok(_) => ValidationErrors::new(),
            Err(validation_errors) => validation_errors,
        };
        validation_errors.add(field, validation_error);
        Err(validation_errors)
    } else {
        validation_errors
    }
}

#[test]
fn append_validation_error_keeps_ok_when_field_is_valid() {
    let result = append_validation_error(Ok(()), "name", Ok(()));
    assert!(result.is_ok());
}

#[test]
fn append_validation_error_collects_each_field() {
    let result = append_validation_error(
        Ok(()),
        "name",
        Err(create_validation_error("invalid_type", "Name must be a string")),
    );
    let result = append_validation_error(
        result,
        "age",
        Err(create_validation_error("invalid_type", "Age must be a number")),
    );
    let errors = result.unwrap_err();
    let field_errors = errors.field_errors();
    assert_eq!(field_errors.len(), 2);
    assert_eq!(field_errors["name"][0].code, "invalid_type");
    assert_eq!(
        field_errors["age"][0].message,
        Some(Cow::from("Age must be a number"))
    );
}
