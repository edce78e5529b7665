//! Navigation seam for forced logout
//!
//! When a session dies (401, or a 403 whose refresh fails) the gateway
//! clears the credential store and then directs the user back to the
//! unauthenticated entry point. What "directing" means is environment
//! specific — a CLI prints a sign-in hint, a desktop shell swaps screens —
//! so the gateway takes it as an injected trait object instead of mutating
//! its environment directly.

/// Where to send the user when the session ends.
pub trait Navigator: Send + Sync {
    /// Called after credentials are cleared. Implementations must not
    /// assume the current operation continues afterwards — the gateway
    /// still returns an error so calling code unwinds.
    fn to_entry_point(&self);
}

/// Navigator that goes nowhere. For headless use and tests.
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn to_entry_point(&self) {}
}
