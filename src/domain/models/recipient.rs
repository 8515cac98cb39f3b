//! Recipient Domain Model
//!
//! A person payments can be sent to, as known by the payment provider.

/// Identifier assigned to a recipient by the payment provider.
///
/// Opaque: the gateway never generates or alters one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipientId(String);

impl RecipientId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RecipientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecipientId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecipientId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Recipient record
///
/// `id` is `None` until the provider has created the recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipient {
    pub id: Option<RecipientId>,
    pub name: String,
    pub bio: Option<String>,
    pub image_src: Option<String>,
    pub number_of_friends: u32,
}

impl Recipient {
    /// Create a recipient that has not been registered upstream yet
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
