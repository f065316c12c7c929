//! Lifecycle logging macros
//!
//! Every event carries `component`, `op` and `event`; the start event names
//! the two inputs, the end event the size of the transcript, and the error
//! event the stable code of the failure. Field names match
//! `wdiffer_core_types::schema`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:expr, $op:expr, $event:expr, $($field:tt)*) => {
        tracing::event!(
            $level,
            component = module_path!(),
            op = $op,
            event = $event,
            $($field)*
        )
    };
}

/// Log the start of an operation, optionally naming the old and new inputs
///
/// # Example
///
/// ```
/// # use wdiffer_core::log_op_start;
/// log_op_start!("word_diff");
/// log_op_start!("word_diff", old = "a.txt", new = "b.txt");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::__log_op_event!(
            tracing::Level::INFO,
            $op,
            wdiffer_core_types::schema::EVENT_START,
        )
    };
    ($op:expr, old = $old:expr, new = $new:expr) => {
        $crate::__log_op_event!(
            tracing::Level::INFO,
            $op,
            wdiffer_core_types::schema::EVENT_START,
            old_path = %$old,
            new_path = %$new,
        )
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use wdiffer_core::log_op_end;
/// log_op_end!("word_diff", duration_ms = 42);
/// log_op_end!("word_diff", duration_ms = 42, edit_count = 7usize);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::__log_op_event!(
            tracing::Level::INFO,
            $op,
            wdiffer_core_types::schema::EVENT_END,
            duration_ms = $duration,
        )
    };
    ($op:expr, duration_ms = $duration:expr, edit_count = $count:expr) => {
        $crate::__log_op_event!(
            tracing::Level::INFO,
            $op,
            wdiffer_core_types::schema::EVENT_END,
            duration_ms = $duration,
            edit_count = $count,
        )
    };
}

/// Log a failed operation with the error's kind and code
///
/// The error is converted to [`ExError`](crate::errors::ExError); its
/// rendering becomes the event message.
///
/// # Example
///
/// ```
/// # use wdiffer_core::{log_op_error, errors::WdiffError};
/// let err = WdiffError::invalid_configuration("bad marker");
/// log_op_error!("word_diff", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            tracing::Level::ERROR,
            $op,
            wdiffer_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            "{}",
            ex_err
        )
    }};
}
