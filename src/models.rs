//! Data Model
//!
//! Records fetched from the sheet endpoint and the donate prefill derived
//! from them.

use serde::{Deserialize, Deserializer};

/// Placeholder glyph shown for any missing card field.
pub const MISSING_GLYPH: &str = "—";

/// One beneficiary entry as published by the sheet endpoint.
///
/// All fields are free-form display strings and any of them may be absent.
/// The sheet publishes numeric cells (ages, initials that look like
/// numbers) as JSON numbers, so every field decodes leniently.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Kid {
    #[serde(rename = "Initials", default, deserialize_with = "de_display")]
    pub initials: Option<String>,
    #[serde(rename = "Interests", default, deserialize_with = "de_display")]
    pub interests: Option<String>,
    #[serde(rename = "Age", default, deserialize_with = "de_display")]
    pub age: Option<String>,
    #[serde(rename = "Needs", default, deserialize_with = "de_display")]
    pub needs: Option<String>,
    #[serde(rename = "Wishes", default, deserialize_with = "de_display")]
    pub wishes: Option<String>,
    #[serde(rename = "Notes", default, deserialize_with = "de_display")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "de_display")]
    pub status: Option<String>,
}

/// Accept strings, numbers, and booleans as display text; null stays
/// absent.
fn de_display<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

impl Kid {
    /// A record is live when its status is absent, blank, or "active"
    /// (any letter case).
    pub fn is_visible(&self) -> bool {
        match &self.status {
            None => true,
            Some(s) => {
                let s = s.trim();
                s.is_empty() || s.eq_ignore_ascii_case("active")
            }
        }
    }
}

/// The endpoint returns either a bare array of records or an object with
/// a `kids` array. Normalize both to `Vec<Kid>`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum KidsPayload {
    List(Vec<Kid>),
    Wrapped {
        #[serde(default)]
        kids: Vec<Kid>,
    },
}

impl KidsPayload {
    pub fn into_kids(self) -> Vec<Kid> {
        match self {
            KidsPayload::List(kids) => kids,
            KidsPayload::Wrapped { kids } => kids,
        }
    }
}

/// Filter the fetched list down to the visible set.
pub fn visible_kids(kids: Vec<Kid>) -> Vec<Kid> {
    kids.into_iter().filter(Kid::is_visible).collect()
}

/// Values injected into the contact form when the modal is opened from a
/// card. Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonatePrefill {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub reason: Option<String>,
}

impl DonatePrefill {
    /// Prefill for a per-card donate trigger: only the reason field,
    /// built from the record's identity and wishlist.
    pub fn for_kid(kid: &Kid) -> Self {
        Self {
            reason: Some(donate_message(kid.initials.as_deref(), kid.wishes.as_deref())),
            ..Default::default()
        }
    }
}

/// Canonical donate message for the modal's reason field.
pub fn donate_message(initials: Option<&str>, wishes: Option<&str>) -> String {
    let identity = initials
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("this child");
    let wishlist = wishes
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING_GLYPH);
    format!("I would like to donate for {}.\n\nWishlist: {}", identity, wishlist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kid_with_status(status: Option<&str>) -> Kid {
        Kid {
            initials: Some("AB".to_string()),
            status: status.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_visibility_filter() {
        assert!(kid_with_status(None).is_visible());
        assert!(kid_with_status(Some("")).is_visible());
        assert!(kid_with_status(Some("active")).is_visible());
        assert!(kid_with_status(Some("Active")).is_visible());
        assert!(kid_with_status(Some("ACTIVE")).is_visible());
        assert!(!kid_with_status(Some("inactive")).is_visible());
        assert!(!kid_with_status(Some("pending")).is_visible());

        let kids = vec![
            kid_with_status(None),
            kid_with_status(Some("inactive")),
            kid_with_status(Some("ACTIVE")),
        ];
        assert_eq!(visible_kids(kids).len(), 2);
    }

    #[test]
    fn test_payload_bare_array() {
        let payload: KidsPayload =
            serde_json::from_str(r#"[{"Initials":"AB"},{"Initials":"CD"}]"#).unwrap();
        let kids = payload.into_kids();
        assert_eq!(kids.len(), 2);
        assert_eq!(kids[0].initials.as_deref(), Some("AB"));
    }

    #[test]
    fn test_payload_wrapped_object() {
        let payload: KidsPayload =
            serde_json::from_str(r#"{"kids":[{"Initials":"X","status":"inactive"}]}"#).unwrap();
        let kids = payload.into_kids();
        assert_eq!(kids.len(), 1);
        assert!(!kids[0].is_visible());
        assert!(visible_kids(kids).is_empty());
    }

    #[test]
    fn test_numeric_fields_decode_as_text() {
        let kid: Kid = serde_json::from_str(r#"{"Initials":"AB","Age":7}"#).unwrap();
        assert_eq!(kid.age.as_deref(), Some("7"));
    }

    #[test]
    fn test_payload_object_without_kids() {
        let payload: KidsPayload = serde_json::from_str(r#"{"note":"nothing here"}"#).unwrap();
        assert!(payload.into_kids().is_empty());
    }

    #[test]
    fn test_donate_message() {
        assert_eq!(
            donate_message(Some("AB"), Some("bike")),
            "I would like to donate for AB.\n\nWishlist: bike"
        );
        assert_eq!(
            donate_message(None, None),
            "I would like to donate for this child.\n\nWishlist: —"
        );
        // blank strings fall back the same as missing values
        assert_eq!(
            donate_message(Some("  "), Some("")),
            "I would like to donate for this child.\n\nWishlist: —"
        );
    }

    #[test]
    fn test_prefill_for_kid() {
        let kid = Kid {
            initials: Some("AB".to_string()),
            wishes: Some("bike".to_string()),
            ..Default::default()
        };
        let prefill = DonatePrefill::for_kid(&kid);
        assert_eq!(
            prefill.reason.as_deref(),
            Some("I would like to donate for AB.\n\nWishlist: bike")
        );
        assert!(prefill.name.is_none());
        assert!(prefill.email.is_none());
    }
}
