/// Sink for the side-channel messages emitted by transform components
///
/// # Examples
///
/// ```
/// use multiplier::diagnostics::Diagnostics;
///
/// fn report<D: Diagnostics>(diagnostics: &D, length: usize) {
///     diagnostics.warn(&format!("very large text ({length} chars)"));
/// }
/// ```
pub trait Diagnostics: Send + Sync {
    /// Report a non-fatal advisory condition
    fn warn(&self, message: &str);

    /// Report a failure that was not anticipated by the caller
    fn error(&self, message: &str);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
