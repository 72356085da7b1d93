//! Commission request submitted through the public contact form.
//!
//! Every field is optional on the wire. Missing or blank fields are not
//! rejected; they are replaced by placeholder text when the notification is
//! formatted. Numbers and booleans are taken as their text, so a numeric
//! Discord id still reaches the artist.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder for an absent contact or type field.
pub const NOT_PROVIDED: &str = "not provided";

/// Placeholder for an absent commission description.
pub const DESCRIPTION_NOT_PROVIDED: &str = "description not provided";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub commission_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub discord: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub commission_details: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub references: Option<String>,
}

impl CommissionRequest {
    pub fn commission_type_or_placeholder(&self) -> &str {
        or_placeholder(&self.commission_type, NOT_PROVIDED)
    }

    pub fn discord_or_placeholder(&self) -> &str {
        or_placeholder(&self.discord, NOT_PROVIDED)
    }

    pub fn email_or_placeholder(&self) -> &str {
        or_placeholder(&self.email, NOT_PROVIDED)
    }

    pub fn details_or_placeholder(&self) -> &str {
        or_placeholder(&self.commission_details, DESCRIPTION_NOT_PROVIDED)
    }

    pub fn references_or_placeholder(&self) -> &str {
        or_placeholder(&self.references, NOT_PROVIDED)
    }
}

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'static str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

/// Any JSON value as text; `null` counts as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_placeholders() {
        let req: CommissionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.details_or_placeholder(), "description not provided");
        assert_eq!(req.discord_or_placeholder(), "not provided");
        assert_eq!(req.email_or_placeholder(), "not provided");
        assert_eq!(req.commission_type_or_placeholder(), "not provided");
        assert_eq!(req.references_or_placeholder(), "not provided");
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let req: CommissionRequest =
            serde_json::from_str(r#"{"discord": "", "commissionDetails": ""}"#).unwrap();
        assert_eq!(req.discord_or_placeholder(), "not provided");
        assert_eq!(req.details_or_placeholder(), "description not provided");
    }

    #[test]
    fn camel_case_fields_are_read() {
        let req: CommissionRequest = serde_json::from_str(
            r#"{"commissionType": "Sketch", "discord": "leti", "email": "a@b.c",
                "commissionDetails": "a cat", "references": "link"}"#,
        )
        .unwrap();
        assert_eq!(req.commission_type_or_placeholder(), "Sketch");
        assert_eq!(req.discord_or_placeholder(), "leti");
        assert_eq!(req.email_or_placeholder(), "a@b.c");
        assert_eq!(req.details_or_placeholder(), "a cat");
        assert_eq!(req.references_or_placeholder(), "link");
    }

    #[test]
    fn scalar_fields_are_taken_as_text() {
        let req: CommissionRequest = serde_json::from_str(
            r#"{"discord": 123456789, "commissionType": true, "email": null}"#,
        )
        .unwrap();
        assert_eq!(req.discord_or_placeholder(), "123456789");
        assert_eq!(req.commission_type_or_placeholder(), "true");
        assert_eq!(req.email_or_placeholder(), "not provided");
    }
}
