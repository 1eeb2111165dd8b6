//! Literal-or-function state updates.
//!
//! Every state write goes through an [`Updater`]: either a replacement value
//! or a pure transform of the previous value. Both resolve the same way via
//! [`Updater::apply`].
//!
//! # Examples
//!
//! ```
//! use tabula_model::Updater;
//!
//! assert_eq!(Updater::Value(3).apply(&7), 3);
//! assert_eq!(Updater::from_fn(|old: &i64| old + 1).apply(&7), 8);
//! ```

use std::fmt;
use std::rc::Rc;

/// A replacement value or a transform over the previous value.
///
/// Transforms are shared (`Rc`) so one updater can be resolved twice: once
/// to preview the new value and once by the host when it commits.
pub enum Updater<T> {
    /// Replace the old value.
    Value(T),
    /// Derive the new value from the old one.
    Fn(Rc<dyn Fn(&T) -> T>),
}

impl<T> Updater<T> {
    /// Wraps a transform.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        Self::Fn(Rc::new(f))
    }
}

impl<T: Clone> Updater<T> {
    /// Resolves the updater against `old`.
    pub fn apply(&self, old: &T) -> T {
        match self {
            Self::Value(value) => value.clone(),
            Self::Fn(f) => f(old),
        }
    }
}

impl<T> From<T> for Updater<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Clone> Clone for Updater<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Fn(f) => Self::Fn(Rc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Updater<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ignores_old() {
        let updater: Updater<String> = "new".to_string().into();
        assert_eq!(updater.apply(&"old".to_string()), "new");
    }

    #[test]
    fn test_fn_is_reusable() {
        let updater = Updater::from_fn(|old: &i64| old * 2);
        let again = updater.clone();
        assert_eq!(updater.apply(&4), 8);
        assert_eq!(again.apply(&5), 10);
    }

    #[test]
    fn test_debug_hides_closure() {
        assert_eq!(format!("{:?}", Updater::Value(1)), "Value(1)");
        assert_eq!(format!("{:?}", Updater::from_fn(|v: &i32| *v)), "Fn(..)");
    }
}
