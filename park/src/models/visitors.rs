use crate::error::{InvalidParameters, InvalidVisitor};
use crate::validators::{self, append_validation_error, type_name};
use crate::ParkResult;
use log::Level;
use serde_json::Value;
use validator::ValidationErrors;

const TICKET_ID: &str = "ticketId";

/// Terms and conditions a visitor has signed
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Gtc {
    pub signed: bool,
    pub version: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub name: String,
    pub age: f64,
    pub ticket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtc: Option<Gtc>,
}

impl Visitor {
    pub fn create(name: String, age: f64, ticket_id: String) -> Visitor {
        Visitor {
            name,
            age,
            ticket_id: Some(ticket_id),
            gtc: None,
        }
    }

    pub fn with_gtc(mut self, gtc: Gtc) -> Visitor {
        self.gtc = Some(gtc);
        self
    }

    /// Clears the ticket id. Revoking an already revoked ticket is a no-op.
    pub fn revoke_ticket(&mut self) -> &mut Visitor {
        if let Some(ticket_id) = self.ticket_id.take() {
            jlog!(Level::Debug, "park::visitors", "Revoked ticket", {
                "visitor": self.name,
                "ticket_id": ticket_id
            });
        }
        self
    }

    pub fn gtc_version(&self) -> Option<&str> {
        self.gtc.as_ref().map(|gtc| gtc.version.as_str())
    }
}

/// Builds a visitor from untyped parameters.
///
/// `name` and `ticket_id` must be strings and `age` must be a number. Every
/// parameter with the wrong type is reported under its field name.
pub fn create_visitor(name: &Value, age: &Value, ticket_id: &Value) -> ParkResult<Visitor> {
    let mut validation_errors = Ok(());
    validation_errors = append_validation_error(
        validation_errors,
        "name",
        validators::validate_string(name, "invalid_type", "Name must be a string"),
    );
    validation_errors = append_validation_error(
        validation_errors,
        "age",
        validators::validate_number(age, "invalid_type", "Age must be a number"),
    );
    validation_errors = append_validation_error(
        validation_errors,
        "ticket_id",
        validators::validate_string(ticket_id, "invalid_type", "Ticket id must be a string"),
    );

    match (validation_errors, name.as_str(), age.as_f64(), ticket_id.as_str()) {
        (Ok(()), Some(name), Some(age), Some(ticket_id)) => {
            Ok(Visitor::create(name.to_string(), age, ticket_id.to_string()))
        }
        (Err(errors), _, _, _) => {
            jlog!(Level::Warn, "park::visitors", "Rejected visitor parameters", {
                "errors": errors.to_string()
            });
            InvalidParameters { errors }.fail()
        }
        // Numbers outside the f64 range only exist with arbitrary precision enabled
        _ => InvalidParameters {
            errors: ValidationErrors::new(),
        }
        .fail(),
    }
}

/// Sets `ticketId` to null on an untyped visitor record and hands the same
/// record back.
pub fn revoke_ticket(visitor: &mut Value) -> ParkResult<&mut Value> {
    let rejection = match *visitor {
        Value::Object(ref mut fields) => match fields.get_mut(TICKET_ID) {
            Some(ticket_id) => {
                let revoked = std::mem::replace(ticket_id, Value::Null);
                jlog!(Level::Debug, "park::visitors", "Revoked ticket", {
                    "ticket_id": revoked
                });
                None
            }
            None => Some(format!("missing {} field", TICKET_ID)),
        },
        ref other => Some(format!("expected an object, found {}", type_name(other))),
    };

    match rejection {
        Some(reason) => {
            jlog!(Level::Warn, "park::visitors", "Rejected ticket revocation", {
                "reason": reason
            });
            InvalidVisitor { reason }.fail()
        }
        None => Ok(visitor),
    }
}

/// Version of the terms and conditions on an untyped visitor record, if any
pub fn gtc_version(visitor: &Value) -> Option<&str> {
    visitor.get("gtc")?.get("version")?.as_str()
}
