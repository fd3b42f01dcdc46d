//! Canonical event names for structured log records
//!
//! These constants are part of the logging contract; downstream log
//! consumers key on them, so they must not change once released.

/// Event name: an operation began
pub const EVENT_START: &str = "op_start";
/// Event name: an operation completed successfully
pub const EVENT_END: &str = "op_end";
/// Event name: an operation ended in error
pub const EVENT_END_ERROR: &str = "op_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_stable() {
        assert_eq!(EVENT_START, "op_start");
        assert_eq!(EVENT_END, "op_end");
        assert_eq!(EVENT_END_ERROR, "op_error");
    }
}
