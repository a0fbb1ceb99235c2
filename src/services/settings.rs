//! Typographic settings.

use std::sync::{PoisonError, RwLock};

use crate::types::DisplayConstraints;

/// Read-only view of the current display constraints.
///
/// Callers re-read on every pagination; values may change between calls.
pub trait SettingsProvider: Send + Sync {
    /// Current constraints.
    fn current(&self) -> DisplayConstraints;
}

/// Fixed constraints.
impl SettingsProvider for DisplayConstraints {
    fn current(&self) -> DisplayConstraints {
        *self
    }
}

/// Constraints that can be changed at runtime.
#[derive(Debug, Default)]
pub struct SharedSettings {
    constraints: RwLock<DisplayConstraints>,
}

impl SharedSettings {
    /// Create settings seeded with `constraints`.
    pub const fn new(constraints: DisplayConstraints) -> Self {
        Self { constraints: RwLock::new(constraints) }
    }

    /// Edit the constraints, returning the new value.
    pub fn update<F>(&self, f: F) -> DisplayConstraints
    where
        F: FnOnce(&mut DisplayConstraints),
    {
        let mut guard = self.constraints.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
        *guard
    }

    /// Replace the constraints.
    pub fn set(&self, constraints: DisplayConstraints) {
        self.update(|c| *c = constraints);
    }
}

impl SettingsProvider for SharedSettings {
    fn current(&self) -> DisplayConstraints {
        *self.constraints.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_settings_apply_updates() {
        let settings = SharedSettings::new(DisplayConstraints::new(40, 4));
        let updated = settings.update(|c| c.max_lines_per_page += 1);
        assert_eq!(updated.max_lines_per_page, 5);
        assert_eq!(settings.current(), DisplayConstraints::new(40, 5));

        settings.set(DisplayConstraints::new(0, 0));
        assert_eq!(settings.current().line_width(), None);
    }

    #[test]
    fn fixed_constraints_are_a_provider() {
        let fixed = DisplayConstraints::new(12, 3);
        assert_eq!(fixed.current(), fixed);
    }
}
