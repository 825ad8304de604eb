use derivative::Derivative;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared, cloneable cell behind every on-screen element.
///
/// The UI thread and the tasks spawned by the controller hold clones of the
/// same handle; a poisoned lock is recovered since element state is always
/// left consistent between statements.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = "T: std::fmt::Debug"),
    Default(bound = "T: Default")
)]
pub struct Shared<T>(Arc<Mutex<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Whether both handles point at the same element.
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Shared<T> {
    pub fn get(&self) -> T {
        self.with(Clone::clone)
    }

    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }
}
