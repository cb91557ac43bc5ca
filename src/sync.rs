//! Mutex shim: `std::sync::Mutex` with `std`, a spin lock under `alloc`.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
type Guard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Guard<'a, T> = spin::MutexGuard<'a, T>;

/// A lock that never reports poisoning.
#[derive(Debug, Default)]
pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    #[cfg(feature = "std")]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0.lock()
    }

    /// Runs `f` with the lock held.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.lock())
    }
}
