//! Optional Chain
//!
//! `Chain<T>` sequences dependent lookups over a possibly-absent value,
//! short-circuiting on absence without a check at every step.
//!
//! Presence is structural: a chain is present exactly when it holds a value,
//! whatever that value is (`0`, `false` and `""` are ordinary present
//! values). A fallible step that errors downgrades the chain to a failed
//! state, which extracts like absence but is observable separately.

enum State<T> {
    Present(T),
    Absent,
    Failed,
}

/// A possibly-absent value with chainable lookups and side effects
pub struct Chain<T> {
    state: State<T>,
}

impl<T> Chain<T> {
    /// Wrap a value; the chain starts present.
    pub fn of(value: T) -> Self {
        Self {
            state: State::Present(value),
        }
    }

    /// Start from an `Option`; `None` starts the chain absent.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::absent(),
        }
    }

    pub fn absent() -> Self {
        Self {
            state: State::Absent,
        }
    }

    fn failed() -> Self {
        Self {
            state: State::Failed,
        }
    }

    /// Apply a lookup that may itself come up empty.
    ///
    /// Absence and failure propagate without invoking `f`.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Option<U>) -> Chain<U> {
        match self.state {
            State::Present(value) => Chain::from_option(f(value)),
            State::Absent => Chain::absent(),
            State::Failed => Chain::failed(),
        }
    }

    /// Apply an infallible transform.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Chain<U> {
        self.bind(|value| Some(f(value)))
    }

    /// Apply a fallible step; an `Err` downgrades the chain to failed.
    pub fn try_bind<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Chain<U> {
        match self.state {
            State::Present(value) => match f(value) {
                Ok(value) => Chain::of(value),
                Err(_) => Chain::failed(),
            },
            State::Absent => Chain::absent(),
            State::Failed => Chain::failed(),
        }
    }

    /// Run a side effect on the value, keeping it. Skipped unless present.
    pub fn tap(self, f: impl FnOnce(&T)) -> Chain<T> {
        if let State::Present(value) = &self.state {
            f(value);
        }
        self
    }

    /// Run a fallback side effect when the chain is absent or failed.
    ///
    /// The state is unchanged, so a later `get` still yields `None`.
    pub fn catch(self, f: impl FnOnce()) -> Chain<T> {
        match self.state {
            State::Present(_) => {}
            State::Absent | State::Failed => f(),
        }
        self
    }

    /// Terminal extraction; absent and failed chains yield `None`.
    pub fn get(self) -> Option<T> {
        match self.state {
            State::Present(value) => Some(value),
            State::Absent | State::Failed => None,
        }
    }

    /// Terminal extraction with a fallback producer.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        self.get().unwrap_or_else(f)
    }

    pub fn is_present(&self) -> bool {
        matches!(self.state, State::Present(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_bind_applies_to_present_value() {
        let result = Chain::of(2).bind(|n| Some(n * 3)).get();
        assert_eq!(result, Some(6));
    }

    #[test]
    fn test_bind_skips_absent_value() {
        let called = Cell::new(false);
        let result = Chain::<u32>::from_option(None)
            .bind(|n| {
                called.set(true);
                Some(n)
            })
            .get();
        assert_eq!(result, None);
        assert!(!called.get());
    }

    #[test]
    fn test_bind_propagates_empty_lookup() {
        let result = Chain::of(2).bind(|_| None::<u32>).bind(|n| Some(n + 1)).get();
        assert_eq!(result, None);
    }

    #[test]
    fn test_falsy_values_are_present() {
        assert!(Chain::of(0).is_present());
        assert!(Chain::of(false).is_present());
        assert!(Chain::of("").is_present());
        assert_eq!(Chain::of(0).get(), Some(0));
    }

    #[test]
    fn test_try_bind_error_becomes_failed() {
        let caught = Cell::new(false);
        let chain = Chain::of("{not json")
            .try_bind(|s| serde_json::from_str::<Vec<u32>>(s))
            .catch(|| caught.set(true));
        assert!(chain.is_failed());
        assert!(caught.get());
        assert_eq!(chain.get(), None);
    }

    #[test]
    fn test_failed_propagates_through_bind() {
        let chain = Chain::of(1)
            .try_bind(|_| Err::<u32, &str>("boom"))
            .bind(|n| Some(n + 1));
        assert!(chain.is_failed());
    }

    #[test]
    fn test_tap_keeps_value_and_runs_only_when_present() {
        let seen = Cell::new(0);
        let result = Chain::of(7).tap(|n| seen.set(*n)).get();
        assert_eq!(result, Some(7));
        assert_eq!(seen.get(), 7);

        let seen = Cell::new(0);
        let result = Chain::<u32>::absent().tap(|n| seen.set(*n)).get();
        assert_eq!(result, None);
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn test_catch_skipped_when_present() {
        let caught = Cell::new(false);
        let result = Chain::of(1).catch(|| caught.set(true)).get();
        assert_eq!(result, Some(1));
        assert!(!caught.get());
    }

    #[test]
    fn test_catch_runs_on_absence_without_recovering() {
        let caught = Cell::new(false);
        let result = Chain::<u32>::absent().catch(|| caught.set(true)).get();
        assert!(caught.get());
        assert_eq!(result, None);
    }

    #[test]
    fn test_unwrap_or_else_fallback() {
        assert_eq!(Chain::of(5).unwrap_or_else(|| 9), 5);
        assert_eq!(Chain::absent().unwrap_or_else(|| 9), 9);
    }
}
