//! Customer data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned when building customer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CustomerValidationError {
    /// The name was absent, empty, or only whitespace.
    #[error("name is required")]
    EmptyName,
}

/// Customer name as submitted by the caller.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
///
/// The original text is kept verbatim. Whether `"Acme"` and `"Acme "` or
/// `"acme"` collide is decided by the store collation, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    /// Validate and construct a [`CustomerName`].
    ///
    /// # Examples
    /// ```
    /// use customer_registry::domain::{CustomerName, CustomerValidationError};
    ///
    /// assert_eq!(CustomerName::new("Acme").unwrap().as_ref(), "Acme");
    /// assert_eq!(CustomerName::new("  "), Err(CustomerValidationError::EmptyName));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, CustomerValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CustomerName> for String {
    fn from(value: CustomerName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CustomerName {
    type Error = CustomerValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Store-assigned customer identifier. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "i64")]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wrap a raw identifier, returning `None` unless it is positive.
    ///
    /// # Examples
    /// ```
    /// use customer_registry::domain::CustomerId;
    ///
    /// assert_eq!(CustomerId::new(7).map(CustomerId::get), Some(7));
    /// assert!(CustomerId::new(0).is_none());
    /// ```
    #[must_use]
    pub fn new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Raw integer value.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<CustomerId> for i64 {
    fn from(value: CustomerId) -> Self {
        value.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated create-customer request handed to the registrar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomerRequest {
    name: CustomerName,
}

impl CreateCustomerRequest {
    /// Build a request from a validated name.
    #[must_use]
    pub fn new(name: CustomerName) -> Self {
        Self { name }
    }

    /// Build a request from an optional raw name, as decoded from a payload.
    ///
    /// An absent name is rejected the same way as a blank one.
    pub fn try_from_raw(name: Option<String>) -> Result<Self, CustomerValidationError> {
        let name = name.ok_or(CustomerValidationError::EmptyName)?;
        CustomerName::new(name).map(Self::new)
    }

    /// Name to register.
    #[must_use]
    pub fn name(&self) -> &CustomerName {
        &self.name
    }
}
