//! Newtype IDs for type-safe entity references.
//!
//! Console identifiers are opaque strings. Use the `define_id!` macro to
//! create wrappers that prevent accidentally passing a project ID where a
//! payment method ID is expected. Values are never validated: whatever the
//! caller supplies is forwarded to the API as-is.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use satellite_billing_core::define_id;
/// define_id!(BucketId);
/// define_id!(ObjectId);
///
/// let bucket = BucketId::new("photos");
/// let object = ObjectId::new("photos");
///
/// // These are different types, so this won't compile:
/// // let _: BucketId = object;
/// assert_eq!(bucket.as_str(), object.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProjectId);
define_id!(PaymentMethodId);

/// Card token issued by the payment processor's client-side SDK.
///
/// Implements `Debug` manually so tokens never end up in logs.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CardToken(String);

impl CardToken {
    /// Create a new card token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CardToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CardToken").field(&"[REDACTED]").finish()
    }
}

impl From<String> for CardToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for CardToken {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_pass_values_through_unvalidated() {
        let id = ProjectId::new(r#"proj"1"#);
        assert_eq!(id.as_str(), r#"proj"1"#);
        assert_eq!(id.to_string(), r#"proj"1"#);
        assert_eq!(String::from(id), r#"proj"1"#);
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = PaymentMethodId::from("pm_1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""pm_1""#);
        let back: PaymentMethodId = serde_json::from_str(r#""pm_1""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_card_token_debug_is_redacted() {
        let token = CardToken::new("tok_visa_4242");
        let debug = format!("{token:?}");
        assert!(!debug.contains("tok_visa_4242"));
        assert!(debug.contains("REDACTED"));
        assert_eq!(token.as_str(), "tok_visa_4242");
    }
}
