//! The user-choice boundary
//!
//! Supplied by the host's dialog subsystem. The render flow suspends on a
//! single blocking question with a fixed set of labeled options; there is
//! no timeout and no in-flight cancellation.

/// Synchronous "present N labeled options, return the chosen index" call
pub trait ChoicePrompt {
    /// Present `options` and return the index the user chose
    ///
    /// `default` is the index to pre-select. A return of `None` means the
    /// prompt was dismissed without choosing; callers treat that as cancel.
    fn choose(&self, title: &str, message: &str, options: &[&str], default: usize)
        -> Option<usize>;
}
