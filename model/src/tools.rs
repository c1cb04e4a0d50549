use std::fmt::Debug;

/// Turns a failure that must not stop the page into an error log.
pub trait LogOnError<T> {
    /// Log the error under `context` and use `fallback` instead.
    fn log_on_error(self, context: &str, fallback: T) -> T;
}

impl<T, E: Debug> LogOnError<T> for Result<T, E> {
    fn log_on_error(self, context: &str, fallback: T) -> T {
        self.unwrap_or_else(|error| {
            log::error!("{context}\n{error:#?}");
            fallback
        })
    }
}
