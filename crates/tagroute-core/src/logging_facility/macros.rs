//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use tagroute_core::log_op_start;
/// log_op_start!("add_rule");
/// log_op_start!("add_rule", tag = "Inbox");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use tagroute_core::log_op_end;
/// log_op_end!("add_rule");
/// log_op_end!("add_rule", tag = "Inbox");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use tagroute_core::{log_op_error, errors::RouteError};
/// let err = RouteError::ItemNotFound { item_id: "b1".to_string() };
/// log_op_error!("relocate", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        let err: &$crate::errors::RouteError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            err_code = err.code(),
            error = %err,
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        let err: &$crate::errors::RouteError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            err_code = err.code(),
            error = %err,
            $($field)*
        );
    }};
}
