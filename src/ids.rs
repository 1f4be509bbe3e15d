//! Anchor identifiers for headings that arrive without one.
//!
//! The generator is an owned counter rather than page-wide state: whoever holds it decides how
//! long identifiers stay unique, and tests can start from a known seed.

/// Prefix used for generated identifiers unless configured otherwise.
pub const DEFAULT_PREFIX: &str = "toc_e";

#[derive(Debug, Clone)]
/// Monotonic source of `<prefix><n>` identifiers, starting at `n = 1`.
pub struct IdGenerator {
    prefix: String,
    counter: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl IdGenerator {
    #[must_use]
    /// Create a generator seeded at zero.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::seeded(prefix, 0)
    }

    #[must_use]
    /// Create a generator whose next identifier uses `counter + 1`.
    pub fn seeded(prefix: impl Into<String>, counter: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter,
        }
    }

    #[allow(clippy::should_implement_trait)]
    /// Increment the counter and format the new identifier.
    pub fn next(&mut self) -> String {
        self.counter += 1;
        format!("{}{}", self.prefix, self.counter)
    }

    #[must_use]
    /// Number of identifiers handed out since the seed.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    #[must_use]
    /// Prefix placed before every generated number.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
#[path = "tests/ids.rs"]
mod tests;
