//! Payment method records as returned by the console billing API.

use serde::{Deserialize, Serialize};

use super::id::PaymentMethodId;

/// A card attached to a user or a project.
///
/// Fields are passed through verbatim from the API. `added_at` is kept as
/// the timestamp string the server sent.
///
/// `is_default` only exists on project listings; user listings leave it
/// `None` and it is omitted when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub exp_year: i64,
    pub exp_month: i64,
    pub brand: String,
    pub last_four: String,
    pub holder_name: String,
    pub added_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl PaymentMethod {
    /// Whether this card is the project's default payment method.
    ///
    /// Always `false` for user-scoped records.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default.unwrap_or(false)
    }

    /// Expiry formatted as `MM/YYYY`.
    #[must_use]
    pub fn expiry(&self) -> String {
        format!("{:02}/{}", self.exp_month, self.exp_year)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn card(is_default: Option<bool>) -> PaymentMethod {
        PaymentMethod {
            id: PaymentMethodId::new("pm_1"),
            exp_year: 2026,
            exp_month: 4,
            brand: "visa".to_string(),
            last_four: "4242".to_string(),
            holder_name: "A".to_string(),
            added_at: "2024-01-01".to_string(),
            is_default,
        }
    }

    #[test]
    fn test_user_card_omits_is_default() {
        let json = serde_json::to_value(card(None)).unwrap();
        assert!(json.get("isDefault").is_none());
        assert_eq!(json["lastFour"], "4242");
        assert_eq!(json["expMonth"], 4);
    }

    #[test]
    fn test_project_card_keeps_is_default() {
        let json = serde_json::to_value(card(Some(true))).unwrap();
        assert_eq!(json["isDefault"], true);
        assert!(card(Some(true)).is_default());
        assert!(!card(None).is_default());
    }

    #[test]
    fn test_expiry_format() {
        assert_eq!(card(None).expiry(), "04/2026");
    }
}
