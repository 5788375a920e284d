//! Per-buffer session guard
//!
//! Each open buffer owns one SessionState. The engine is installed for
//! a buffer at most once; reopening the buffer starts a fresh session.

/// Initialization state of one editing buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the engine has been installed for this buffer
    pub initialized: bool,
}

impl SessionState {
    /// Create an uninitialized session (buffer just opened)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful install
    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Start over, as when the buffer is closed and reopened
    pub fn reset(&mut self) {
        self.initialized = false;
    }
}

/// Whether the caller should install the engine for this session
///
/// Pure read: the caller sets the flag itself after setup succeeds.
pub fn should_initialize(session: &SessionState) -> bool {
    !session.initialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_should_initialize() {
        let session = SessionState::new();
        assert!(should_initialize(&session));
        // No side effect from the check itself
        assert!(should_initialize(&session));
    }

    #[test]
    fn test_initialized_session_is_skipped() {
        let mut session = SessionState::new();
        session.mark_initialized();
        assert!(!should_initialize(&session));
        assert!(!should_initialize(&session));
    }

    #[test]
    fn test_reset() {
        let mut session = SessionState::new();
        session.mark_initialized();
        session.reset();
        assert!(should_initialize(&session));
    }
}
