//! Parsing of untyped purchase input.
//!
//! Callers that receive purchase data as JSON (or anything else that ends up
//! as a `serde_json::Value`) go through these functions before the purchase
//! rules run. Each item is checked on its own, in list order: it must be a
//! ticket type request and ask for at least one ticket. Rules over the whole
//! purchase are decided by [`assess_purchase`](crate::assess_purchase).

use serde_json::Value;

use crate::error::{InvalidPurchase, Result};
use crate::ticket::{TicketCategory, TicketTypeRequest};

const TYPE_FIELD: &str = "type";
const COUNT_FIELD: &str = "noOfTickets";

/// Parses an account ID. Only positive JSON integers are accepted.
pub fn parse_account_id(value: &Value) -> Result<u64> {
    value
        .as_u64()
        .filter(|id| *id > 0)
        .ok_or(InvalidPurchase::InvalidAccountId)
}

/// Parses one ticket type request of the form
/// `{"type": "ADULT", "noOfTickets": 2}`.
///
/// `index` is the position of the item in the request list and is reported
/// in the error. The count must be a JSON integer of at least 1; numbers
/// written with a fraction part, including `2.0`, are rejected as malformed.
pub fn parse_ticket_request(index: usize, value: &Value) -> Result<TicketTypeRequest> {
    let malformed = |reason: String| InvalidPurchase::MalformedRequest { index, reason };

    let object = value.as_object().ok_or_else(|| {
        malformed(format!(
            "expected a ticket type request, got {}",
            describe(value)
        ))
    })?;

    let category = match object.get(TYPE_FIELD) {
        None => return Err(malformed(format!("missing field `{TYPE_FIELD}`"))),
        Some(Value::String(name)) => name
            .parse::<TicketCategory>()
            .map_err(|e| malformed(e.to_string()))?,
        Some(other) => {
            return Err(malformed(format!(
                "`{TYPE_FIELD}` must be a string, got {}",
                describe(other)
            )));
        }
    };

    let count = match object.get(COUNT_FIELD) {
        None => return Err(malformed(format!("missing field `{COUNT_FIELD}`"))),
        Some(Value::Number(number)) => {
            if let Some(count) = number.as_u64().filter(|count| *count >= 1) {
                // Anything this large is over every ticket limit anyway.
                u32::try_from(count).unwrap_or(u32::MAX)
            } else if let Some(count) = number.as_i64() {
                return Err(InvalidPurchase::TicketCountBelowMinimum {
                    index,
                    category,
                    count,
                });
            } else {
                return Err(malformed(format!(
                    "`{COUNT_FIELD}` must be an integer, got {number}"
                )));
            }
        }
        Some(other) => {
            return Err(malformed(format!(
                "`{COUNT_FIELD}` must be an integer, got {}",
                describe(other)
            )));
        }
    };

    Ok(TicketTypeRequest::new(category, count))
}

/// Parses every item of a request list, stopping at the first invalid one.
pub fn parse_ticket_requests(values: &[Value]) -> Result<Vec<TicketTypeRequest>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| parse_ticket_request(index, value))
        .collect()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
