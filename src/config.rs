//! Engine configuration

/// Search depth used by the default engine
pub const DEFAULT_MAX_DEPTH: u8 = 6;

/// Deepest search the command line accepts
pub const MAX_SUPPORTED_DEPTH: u8 = 8;

/// AI engine settings.
///
/// # Example
///
/// ```
/// use gomoku::EngineConfig;
///
/// let config = EngineConfig::default().with_max_depth(4);
/// assert_eq!(config.max_depth, 4);
/// assert!(config.tactical_checks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum search depth (clamped to `1..=MAX_SUPPORTED_DEPTH`)
    pub max_depth: u8,
    /// Play an immediate five, or block the opponent's, before searching
    pub tactical_checks: bool,
}

impl EngineConfig {
    #[must_use]
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth.clamp(1, MAX_SUPPORTED_DEPTH);
        self
    }

    #[must_use]
    pub fn with_tactical_checks(mut self, enabled: bool) -> Self {
        self.tactical_checks = enabled;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            tactical_checks: true,
        }
    }
}
