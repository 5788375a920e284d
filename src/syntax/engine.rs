//! Syntax engine
//!
//! This module provides the SyntaxEngine that owns the category table
//! and style binding, and tracks per-buffer install sessions.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::binding::{RoleName, Span, StyleBinding};
use super::classifier::TokenClassifier;
use super::session::{should_initialize, SessionState};
use super::table::CategoryTable;
use super::tokens::{Category, Token};

/// Buffer identifier (index assigned by the host editor)
pub type BufferId = usize;

/// Main classification engine
pub struct SyntaxEngine {
    /// Rules shared by every buffer
    table: CategoryTable,
    binding: StyleBinding,
    /// Per-buffer sessions (buffer index -> session)
    sessions: HashMap<BufferId, SessionState>,
    /// Whether highlighting is enabled
    pub enabled: bool,
}

impl SyntaxEngine {
    /// Create an engine for a table
    pub fn new(table: CategoryTable) -> Self {
        Self {
            table,
            binding: StyleBinding::new(),
            sessions: HashMap::new(),
            enabled: true,
        }
    }

    pub fn binding(&self) -> &StyleBinding {
        &self.binding
    }

    /// Classifier wired to this engine's table
    pub fn classifier(&self) -> TokenClassifier<'_> {
        TokenClassifier::new(&self.table)
    }

    /// Start a fresh session for a buffer
    ///
    /// Opening an already-open buffer (a reload) discards its old session.
    pub fn open_buffer(&mut self, buffer: BufferId) {
        self.sessions.insert(buffer, SessionState::new());
    }

    /// End a buffer's session (when buffer is closed)
    pub fn close_buffer(&mut self, buffer: BufferId) {
        self.sessions.remove(&buffer);
    }

    /// Read a buffer's session
    pub fn session(&self, buffer: BufferId) -> Option<&SessionState> {
        self.sessions.get(&buffer)
    }

    /// Get or create a buffer's session, for hosts that manage the flag
    pub fn session_mut(&mut self, buffer: BufferId) -> &mut SessionState {
        self.sessions.entry(buffer).or_default()
    }

    /// Install the engine for a buffer
    ///
    /// Returns `true` if this call performed the install, `false` if the
    /// buffer's session was already initialized.
    pub fn install(&mut self, buffer: BufferId) -> bool {
        let session = self.sessions.entry(buffer).or_default();
        if !should_initialize(session) {
            trace!(buffer, "syntax engine already installed");
            return false;
        }

        session.mark_initialized();
        debug!(
            buffer,
            table = %self.table.name,
            rules = self.table.entries().len(),
            "installed syntax engine"
        );
        true
    }

    /// Check whether a buffer's session has been installed
    pub fn is_installed(&self, buffer: BufferId) -> bool {
        self.sessions.get(&buffer).is_some_and(|s| s.initialized)
    }

    /// Classify one token's text
    pub fn classify(&self, text: &str) -> Category {
        self.classifier().classify(text)
    }

    /// Role name for one token's text
    pub fn role_for(&self, text: &str) -> Option<RoleName> {
        self.binding.style_for(self.classify(text))
    }

    /// Classify a buffer's tokens into role-bound spans
    ///
    /// Returns an empty vec if highlighting is disabled or the engine is
    /// not installed for this buffer.
    pub fn highlight<'a, I>(&self, buffer: BufferId, tokens: I) -> Vec<Span>
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        if !self.enabled || !self.is_installed(buffer) {
            return Vec::new();
        }
        self.classifier().classify_tokens(tokens, &self.binding)
    }

    /// Toggle syntax highlighting on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

impl Default for SyntaxEngine {
    fn default() -> Self {
        Self::new(CategoryTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token<'_>> {
        source
            .split(' ')
            .scan(0, |offset, word| {
                let token = Token::new(word, *offset);
                *offset += word.len() + 1;
                Some(token)
            })
            .collect()
    }

    #[test]
    fn test_install_once_per_session() {
        let mut engine = SyntaxEngine::default();
        engine.open_buffer(0);

        assert!(!engine.is_installed(0));
        assert!(engine.install(0));
        assert!(engine.is_installed(0));
        assert!(!engine.install(0));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut engine = SyntaxEngine::default();
        engine.open_buffer(0);
        engine.open_buffer(1);

        assert!(engine.install(0));
        assert!(!engine.is_installed(1));
        assert!(engine.install(1));
    }

    #[test]
    fn test_reopen_starts_fresh_session() {
        let mut engine = SyntaxEngine::default();
        engine.open_buffer(3);
        engine.install(3);

        engine.close_buffer(3);
        assert!(engine.session(3).is_none());

        engine.open_buffer(3);
        assert!(!engine.is_installed(3));
        assert!(engine.install(3));
    }

    #[test]
    fn test_host_can_clear_flag() {
        let mut engine = SyntaxEngine::default();
        engine.install(0);
        engine.session_mut(0).initialized = false;
        assert!(engine.install(0));
    }

    #[test]
    fn test_highlight_requires_install() {
        let mut engine = SyntaxEngine::default();
        engine.open_buffer(0);

        assert!(engine.highlight(0, tokens("1 2 swap")).is_empty());

        engine.install(0);
        let spans = engine.highlight(0, tokens("1 2 swap"));
        let roles: Vec<&str> = spans.iter().map(|s| s.role.as_str()).collect();
        assert_eq!(roles, vec!["Number", "Number", "Keyword"]);
        assert_eq!((spans[2].start, spans[2].end), (4, 8));
    }

    #[test]
    fn test_highlight_disabled() {
        let mut engine = SyntaxEngine::default();
        engine.install(0);
        engine.toggle();
        assert!(engine.highlight(0, tokens("true")).is_empty());
        engine.toggle();
        assert_eq!(engine.highlight(0, tokens("true")).len(), 1);
    }

    #[test]
    fn test_role_for() {
        let engine = SyntaxEngine::default();
        assert_eq!(engine.role_for("rot"), Some(RoleName::KEYWORD));
        assert_eq!(engine.role_for("false"), Some(RoleName::BOOLEAN));
        assert_eq!(engine.role_for("10"), Some(RoleName::NUMBER));
        assert_eq!(engine.role_for("x"), None);
    }
}
