//! Variadic call forms for the emit methods.
//!
//! ```rust,ignore
//! log_info!(logger, "listening on", addr);
//! log_error!(logger);                 // empty message
//! log_panic!(logger, "bad state", id); // never returns
//! ```

#[macro_export]
macro_rules! log_trace {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.trace(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.warn(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.error(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_panic {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.panic(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
