//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, ratings within range) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::collections::HashSet;
use std::ops::Deref;

use phonenumber::{Mode, country, parse};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Rating outside of the 1..=5 star scale.
    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,
    /// Percentage outside of 0..=100.
    #[error("percentage must be between 0 and 100")]
    PercentageOutOfRange,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ClientId, "Unique identifier for a client.");
id_newtype!(AppointmentId, "Unique identifier for an appointment.");
id_newtype!(FeedbackId, "Unique identifier for a feedback entry.");
id_newtype!(TeamMemberId, "Unique identifier for a team member.");
id_newtype!(LoyaltyId, "Unique identifier for a loyalty card.");
id_newtype!(ServiceId, "Unique identifier for a catalog service.");
id_newtype!(NotificationId, "Unique identifier for a notification.");

/// Lower-cased and validated client email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ClientEmail(String);

impl ClientEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ClientEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClientEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ClientEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientEmail> for String {
    fn from(value: ClientEmail) -> Self {
        value.0
    }
}

/// Trims whitespace and rejects empty inputs.
fn trimmed_non_empty(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    Ok(trimmed.to_string())
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                Ok(Self(trimmed_non_empty(value.into())?))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    PersonName,
    "Name of a client or barber, trimmed and non-empty."
);

non_empty_string_newtype!(
    ServiceName,
    "Name of a barbershop service, trimmed and non-empty."
);

non_empty_string_newtype!(ProductName, "Inventory product name wrapper.");

non_empty_string_newtype!(CategoryName, "Inventory category label wrapper.");

non_empty_string_newtype!(
    Title,
    "Short heading used by notifications and team roles."
);

non_empty_string_newtype!(
    TransactionId,
    "Payment transaction reference such as `T001`."
);

non_empty_string_newtype!(ProductId, "Inventory product reference.");

impl ProductId {
    /// Generates a short random identifier for a freshly added product.
    pub fn generate() -> Self {
        let raw = Uuid::new_v4().simple().to_string();
        Self(raw[..7].to_string())
    }
}

/// Reverses the escaping `ammonia` applies to text nodes.
fn unescape_text(escaped: &str) -> String {
    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

/// Free text sanitized of markup, possibly empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(from = "String", into = "String")]
pub struct SanitizedText(String);

impl SanitizedText {
    /// Strips every tag (dropping script and style bodies) and surrounding
    /// whitespace. The result is plain text, not HTML.
    pub fn new<S: Into<String>>(value: S) -> Self {
        let cleaned = ammonia::Builder::empty()
            .clean_content_tags(HashSet::from(["script", "style"]))
            .clean(&value.into())
            .to_string();
        Self(unescape_text(&cleaned).trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for SanitizedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SanitizedText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<SanitizedText> for String {
    fn from(value: SanitizedText) -> Self {
        value.0
    }
}

/// Star rating on the 1..=5 scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, TypeConstraintError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::RatingOutOfRange)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = TypeConstraintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whole percentage in 0..=100, used for barber availability.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub fn new(value: u8) -> Result<Self, TypeConstraintError> {
        if value <= 100 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::PercentageOutOfRange)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = TypeConstraintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

/// Normalizes a phone number string to E.164 format.
///
/// Numbers without a country prefix are read as Brazilian numbers, which is
/// how clients type them into the dashboard (`(11) 98765-4321`).
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed =
        parse(Some(country::Id::BR), trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    if !phonenumber::is_valid(&parsed) {
        return Err(TypeConstraintError::InvalidPhone);
    }
    Ok(parsed.format().mode(Mode::E164).to_string())
}

/// Normalized phone number wrapper (E.164).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Constructs a phone number ensuring it is valid and normalizes to E.164 format.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_phone_to_e164(&value.into())?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_reject_non_positive_values() {
        assert_eq!(ClientId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ClientId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ClientId::new(7).map(ClientId::get), Ok(7));
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = ClientEmail::new("  Henrique@Exemplo.COM ").unwrap();
        assert_eq!(email.as_str(), "henrique@exemplo.com");
        assert!(ClientEmail::new("not-an-email").is_err());
    }

    #[test]
    fn names_are_trimmed_and_non_empty() {
        assert_eq!(PersonName::new("  Bruno Costa ").unwrap().as_str(), "Bruno Costa");
        assert_eq!(PersonName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn rating_is_bounded() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(5).unwrap().get(), 5);
    }

    #[test]
    fn sanitized_text_strips_scripts() {
        let text = SanitizedText::new("  Ótimo <script>alert('x')</script>corte ");
        assert_eq!(text.as_str(), "Ótimo corte");
    }

    #[test]
    fn sanitized_text_keeps_plain_symbols() {
        let text = SanitizedText::new("Corte & barba <3 <b>top</b>");
        assert_eq!(text.as_str(), "Corte & barba <3 top");
        assert_eq!(SanitizedText::new(text.as_str().to_string()), text);
    }

    #[test]
    fn name_newtypes_deserialize_through_validation() {
        let name: PersonName = serde_json::from_str("\"  Ana Souza \"").unwrap();
        assert_eq!(name.as_str(), "Ana Souza");
        assert!(serde_json::from_str::<PersonName>("\"   \"").is_err());
    }

    #[test]
    fn generated_product_ids_are_short() {
        let id = ProductId::generate();
        assert_eq!(id.as_str().len(), 7);
    }

    #[test]
    fn local_phone_numbers_normalize_to_e164() {
        let phone = PhoneNumber::new("(11) 98765-4321").unwrap();
        assert_eq!(phone.as_str(), "+5511987654321");
        assert!(PhoneNumber::new("abc").is_err());
    }

    #[test]
    fn ids_deserialize_through_validation() {
        let id: ClientId = serde_json::from_str("3").unwrap();
        assert_eq!(id.get(), 3);
        assert!(serde_json::from_str::<ClientId>("0").is_err());
    }
}
