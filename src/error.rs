use thiserror::Error;

/// Problems with the embedded catalog data. Only raised while constructing a catalog.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to deserialize catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Duplicate time slot {slot_id} in arena {arena_id}")]
    DuplicateSlot { arena_id: String, slot_id: String },
}

/// Key-value storage failures. Never shown to users.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage contents unreadable: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Form input rejected before anything is mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Everything a request can fail with. Each variant renders as a user-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{0}")]
    SignInRequired(&'static str),

    #[error("Please select a time slot to book.")]
    NoTimeSlot,

    #[error("Time slot {slot_id} is not available")]
    SlotUnavailable { slot_id: String },

    #[error("{0} is not available yet")]
    NotImplemented(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Failed to create account")]
    RegistrationFailed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
