//! Outcomes of a customer registration and the result contract built from them.
//!
//! Duplicate names and refused inserts are ordinary business outcomes. They
//! are modelled as [`RegistrationOutcome`] variants rather than errors so the
//! transport can return them as successful responses.

use serde::Serialize;

use super::customer::{CustomerId, CustomerName};

/// Numeric result code carried in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// The customer was inserted.
    Success,
    /// The store did not hand back a usable identifier.
    InsertionFailed,
    /// A customer with the same name already exists.
    DuplicateName,
}

impl ResultCode {
    /// Wire value of the code.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InsertionFailed => 1000,
            Self::DuplicateName => 1001,
        }
    }

    /// Human-readable message paired with the code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Success => "customer added",
            Self::InsertionFailed => "could not insert customer",
            Self::DuplicateName => "customer already exists",
        }
    }
}

impl Serialize for ResultCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.as_i32())
    }
}

/// What happened to a registration that reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A new row was inserted with the given identifier.
    Inserted {
        /// Identifier assigned by the store.
        id: CustomerId,
    },
    /// The name is already taken; nothing was written.
    Duplicate,
    /// The store accepted the call but returned no positive identifier.
    InsertionFailed,
}

impl RegistrationOutcome {
    /// Result code describing this outcome.
    #[must_use]
    pub const fn code(self) -> ResultCode {
        match self {
            Self::Inserted { .. } => ResultCode::Success,
            Self::Duplicate => ResultCode::DuplicateName,
            Self::InsertionFailed => ResultCode::InsertionFailed,
        }
    }

    /// Identifier to report, `0` unless a row was inserted.
    #[must_use]
    pub fn customer_id(self) -> i64 {
        match self {
            Self::Inserted { id } => id.get(),
            Self::Duplicate | Self::InsertionFailed => 0,
        }
    }
}

/// Complete output contract of a registration.
///
/// # Examples
/// ```
/// use customer_registry::domain::{
///     CustomerId, CustomerName, OperationResult, RegistrationOutcome, ResultCode,
/// };
///
/// let name = CustomerName::new("Acme").unwrap();
/// let id = CustomerId::new(1).unwrap();
/// let result = OperationResult::new(name, RegistrationOutcome::Inserted { id });
/// assert_eq!(result.error_code(), ResultCode::Success);
/// assert_eq!(result.customer_id(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    error_code: ResultCode,
    message: &'static str,
    customer_id: i64,
    name: CustomerName,
}

impl OperationResult {
    /// Build the result for `name` from a registration outcome.
    #[must_use]
    pub fn new(name: CustomerName, outcome: RegistrationOutcome) -> Self {
        let error_code = outcome.code();
        Self {
            error_code,
            message: error_code.message(),
            customer_id: outcome.customer_id(),
            name,
        }
    }

    /// Result code.
    #[must_use]
    pub fn error_code(&self) -> ResultCode {
        self.error_code
    }

    /// Message matching [`Self::error_code`].
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// New identifier on success, `0` otherwise.
    #[must_use]
    pub fn customer_id(&self) -> i64 {
        self.customer_id
    }

    /// Echo of the submitted name.
    #[must_use]
    pub fn name(&self) -> &CustomerName {
        &self.name
    }
}
