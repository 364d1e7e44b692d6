//! Response mapping for character PLOD lookups.
//!
//! Every lookup endpoint answers with the same JSON envelope:
//!
//! ```text
//! { "message": string, "data"?: any, "errorProperty"?: string }
//! ```
//!
//! Which status and which envelope fields a [`StoreOutcome`] turns into
//! depends on the endpoint. [`ResponseContract`] names each endpoint and
//! owns that table so handlers never pick statuses by hand.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Error, StoreOutcome};

/// Message sent with every successful lookup.
pub const SUCCESS_MESSAGE: &str = "Success";
/// Message sent when a character PLOD lookup comes back empty.
pub const PLOD_NOT_FOUND_MESSAGE: &str = "Failure. No character PLOD with that data existing!";
/// Message sent when an id lookup comes back empty.
pub const CHARACTER_NOT_FOUND_MESSAGE: &str = "Failure. No character with that data existing!";
/// Message sent when search criteria name a property records do not have.
pub const UNKNOWN_PROPERTY_MESSAGE: &str =
    "Error: Bad request. Usage of non existing schema property!";

/// JSON envelope wrapping every lookup response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_property: Option<String>,
}

impl Envelope {
    /// Envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            error_property: None,
        }
    }

    /// Attach a data payload.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach the name of the property that made a request unusable.
    #[must_use]
    pub fn with_error_property(mut self, property: impl Into<String>) -> Self {
        self.error_property = Some(property.into());
        self
    }

    /// Envelope message.
    pub fn message_text(&self) -> &str {
        self.message.as_str()
    }

    /// Data payload, if present.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Offending property name, if present.
    pub fn error_property(&self) -> Option<&str> {
        self.error_property.as_deref()
    }
}

/// Lookup endpoints and their outcome-to-response tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseContract {
    /// Criteria search. The only endpoint that answers 400.
    Find,
    /// Top records by PLOD. Failures carry no data.
    TopByPlod,
    /// Lookup by record id.
    ById,
    /// Lookup by description.
    ByDescription,
}

impl ResponseContract {
    /// Map a lookup outcome to its status code and envelope.
    ///
    /// # Errors
    /// Returns [`Error::internal`] when a found payload cannot be serialised.
    ///
    /// # Examples
    /// ```
    /// use actix_web::http::StatusCode;
    /// use plod_backend::domain::StoreOutcome;
    /// use plod_backend::inbound::http::envelope::ResponseContract;
    ///
    /// let outcome: StoreOutcome<Vec<String>> = StoreOutcome::invalid("house");
    /// let (status, envelope) = ResponseContract::Find.map(outcome).expect("mappable");
    /// assert_eq!(status, StatusCode::BAD_REQUEST);
    /// assert_eq!(envelope.error_property(), Some("house"));
    /// ```
    pub fn map<T: Serialize>(
        self,
        outcome: StoreOutcome<T>,
    ) -> Result<(StatusCode, Envelope), Error> {
        let mapped = match outcome {
            StoreOutcome::Found(payload) => {
                let data = serde_json::to_value(payload)
                    .map_err(|err| Error::internal(format!("serialise lookup payload: {err}")))?;
                (StatusCode::OK, Envelope::message(SUCCESS_MESSAGE).with_data(data))
            }
            StoreOutcome::NotFound(reason) => (StatusCode::NOT_FOUND, self.not_found(reason)),
            StoreOutcome::Invalid(reason) => match self {
                Self::Find => (
                    StatusCode::BAD_REQUEST,
                    Envelope::message(UNKNOWN_PROPERTY_MESSAGE).with_error_property(reason),
                ),
                _ => (StatusCode::NOT_FOUND, self.not_found(reason)),
            },
        };
        Ok(mapped)
    }

    /// Map a lookup outcome straight into an HTTP response.
    ///
    /// # Errors
    /// See [`ResponseContract::map`].
    pub fn respond<T: Serialize>(self, outcome: StoreOutcome<T>) -> Result<HttpResponse, Error> {
        let (status, envelope) = self.map(outcome)?;
        Ok(HttpResponse::build(status).json(envelope))
    }

    fn not_found(self, reason: String) -> Envelope {
        match self {
            Self::Find | Self::ByDescription => {
                Envelope::message(PLOD_NOT_FOUND_MESSAGE).with_data(Value::String(reason))
            }
            Self::TopByPlod => Envelope::message(PLOD_NOT_FOUND_MESSAGE),
            Self::ById => {
                Envelope::message(CHARACTER_NOT_FOUND_MESSAGE).with_data(Value::String(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ResponseContract::Find)]
    #[case(ResponseContract::TopByPlod)]
    #[case(ResponseContract::ById)]
    #[case(ResponseContract::ByDescription)]
    fn found_is_success_with_payload(#[case] contract: ResponseContract) {
        let (status, envelope) = contract
            .map(StoreOutcome::found(json!({"name": "Arya"})))
            .expect("mappable");

        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope.message_text(), SUCCESS_MESSAGE);
        assert_eq!(envelope.data(), Some(&json!({"name": "Arya"})));
        assert_eq!(envelope.error_property(), None);
    }

    #[rstest]
    #[case(ResponseContract::Find, PLOD_NOT_FOUND_MESSAGE, Some(json!("gone")))]
    #[case(ResponseContract::TopByPlod, PLOD_NOT_FOUND_MESSAGE, None)]
    #[case(ResponseContract::ById, CHARACTER_NOT_FOUND_MESSAGE, Some(json!("gone")))]
    #[case(ResponseContract::ByDescription, PLOD_NOT_FOUND_MESSAGE, Some(json!("gone")))]
    fn not_found_follows_endpoint_table(
        #[case] contract: ResponseContract,
        #[case] message: &str,
        #[case] data: Option<Value>,
    ) {
        let (status, envelope) = contract
            .map(StoreOutcome::<Value>::not_found("gone"))
            .expect("mappable");

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(envelope.message_text(), message);
        assert_eq!(envelope.data(), data.as_ref());
    }

    #[rstest]
    fn invalid_find_is_bad_request_naming_property() {
        let (status, envelope) = ResponseContract::Find
            .map(StoreOutcome::<Value>::invalid("house"))
            .expect("mappable");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&envelope).expect("serialisable"),
            json!({
                "message": UNKNOWN_PROPERTY_MESSAGE,
                "errorProperty": "house",
            })
        );
    }

    #[rstest]
    #[case(ResponseContract::TopByPlod)]
    #[case(ResponseContract::ById)]
    #[case(ResponseContract::ByDescription)]
    fn invalid_lookups_collapse_to_not_found(#[case] contract: ResponseContract) {
        let (status, envelope) = contract
            .map(StoreOutcome::<Value>::invalid("bad key"))
            .expect("mappable");

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(envelope.error_property(), None);
    }

    #[rstest]
    fn envelope_omits_absent_fields() {
        let json = serde_json::to_value(Envelope::message(PLOD_NOT_FOUND_MESSAGE))
            .expect("serialisable");
        assert_eq!(json, json!({"message": PLOD_NOT_FOUND_MESSAGE}));
    }
}
