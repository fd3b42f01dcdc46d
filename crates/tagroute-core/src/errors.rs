use thiserror::Error;

/// Result type alias using RouteError
pub type Result<T> = std::result::Result<T, RouteError>;

/// Error taxonomy for TagRoute operations
///
/// Every failure in this core is scoped to a single rule operation or a
/// single change notification; nothing here is fatal to the process and
/// nothing is retried automatically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// Rule rejected before installation (missing tag or destination)
    #[error("Invalid rule: {reason}")]
    InvalidRule { reason: String },

    /// Item vanished between rule creation and firing
    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: String },

    /// Rule destination no longer exists in the host store
    #[error("Destination not found: {destination_id}")]
    DestinationMissing { destination_id: String },

    /// The moving item's container/order could not be resolved
    #[error("Cannot resolve container for item: {item_id}")]
    ContainerUnresolved { item_id: String },

    /// Moving the item into the destination would nest it inside its own subtree
    #[error("Cycle detected: destination {destination_id} is inside the subtree of {item_id}")]
    CycleDetected {
        item_id: String,
        destination_id: String,
    },

    /// A host mutation request failed
    #[error("Host request '{op}' failed: {message}")]
    Host { op: String, message: String },

    /// Serialization error (JSON encoding/decoding of rules or settings)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RouteError {
    /// Stable machine-readable code for this error
    ///
    /// Codes are part of the logging contract and must not change once
    /// released.
    pub fn code(&self) -> &'static str {
        match self {
            RouteError::InvalidRule { .. } => "ERR_INVALID_RULE",
            RouteError::ItemNotFound { .. } => "ERR_ITEM_NOT_FOUND",
            RouteError::DestinationMissing { .. } => "ERR_DESTINATION_MISSING",
            RouteError::ContainerUnresolved { .. } => "ERR_CONTAINER_UNRESOLVED",
            RouteError::CycleDetected { .. } => "ERR_CYCLE_DETECTED",
            RouteError::Host { .. } => "ERR_HOST",
            RouteError::Serialization { .. } => "ERR_SERIALIZATION",
        }
    }
}

/// Conversion from serde_json::Error to RouteError
impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        RouteError::Serialization {
            message: err.to_string(),
        }
    }
}
