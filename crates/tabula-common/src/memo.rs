//! Dependency-tuple memoization.
//!
//! A [`Memo`] caches the last result of a derivation together with the
//! dependency tuple it was computed from. On the next read the new tuple is
//! compared against the cached one with [`DepKey::same`]; the derivation only
//! runs again when at least one dependency changed.
//!
//! Comparison is by identity, not by value: two `Arc`s (or `Rc`s) holding
//! equal data are still different dependencies. Scalars have no identity
//! apart from their value, so they compare with `==`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tabula_common::Memo;
//!
//! let memo: Memo<(Arc<Vec<i64>>,), i64> = Memo::new("sum");
//! let data = Arc::new(vec![1, 2, 3]);
//!
//! assert_eq!(memo.get((Arc::clone(&data),), |(v,)| v.iter().sum()), 6);
//! assert!(memo.is_cached());
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

/// A value that can take part in a memoization dependency tuple.
pub trait DepKey {
    /// Returns `true` when `other` is the same dependency as `self`.
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> DepKey for Arc<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> DepKey for Rc<T> {
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: DepKey> DepKey for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! scalar_dep_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DepKey for $ty {
                fn same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

scalar_dep_key!(bool, i32, i64, u32, u64, usize);

macro_rules! tuple_dep_key {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: DepKey),+> DepKey for ($($name,)+) {
            fn same(&self, other: &Self) -> bool {
                $(self.$idx.same(&other.$idx))&&+
            }
        }
    };
}

tuple_dep_key!(A: 0);
tuple_dep_key!(A: 0, B: 1);
tuple_dep_key!(A: 0, B: 1, C: 2);
tuple_dep_key!(A: 0, B: 1, C: 2, D: 3);

/// Cache holding the last dependency tuple and the result derived from it.
///
/// Single-threaded: the cache sits behind a `RefCell` and must be read on the
/// same execution context that mutates the inputs.
pub struct Memo<D, R> {
    key: &'static str,
    debug: bool,
    cache: RefCell<Option<(D, R)>>,
}

impl<D, R> Memo<D, R> {
    /// Creates an empty memo. `key` names the derivation in log output.
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            debug: false,
            cache: RefCell::new(None),
        }
    }

    /// Enables debug logging of recomputations.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Toggles debug logging without dropping the cached result.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Whether a result is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// Drops the cached result so the next read recomputes.
    pub fn invalidate(&self) {
        self.cache.borrow_mut().take();
    }
}

impl<D: DepKey, R: Clone> Memo<D, R> {
    /// Returns the cached result when `deps` matches the cached tuple,
    /// otherwise runs `compute` and caches its result.
    ///
    /// The cache is not borrowed while `compute` runs, so the derivation may
    /// read other memos.
    pub fn get<F>(&self, deps: D, compute: F) -> R
    where
        F: FnOnce(&D) -> R,
    {
        if let Some((cached_deps, result)) = self.cache.borrow().as_ref()
            && cached_deps.same(&deps)
        {
            return result.clone();
        }

        let started = self.debug.then(Instant::now);
        let result = compute(&deps);

        if let Some(started) = started {
            tracing::debug!(
                key = self.key,
                elapsed_us = started.elapsed().as_micros() as u64,
                "Memo recomputed"
            );
        }

        *self.cache.borrow_mut() = Some((deps, result.clone()));
        result
    }
}

impl<D, R> fmt::Debug for Memo<D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("key", &self.key)
            .field("debug", &self.debug)
            .field("cached", &self.is_cached())
            .finish()
    }
}
