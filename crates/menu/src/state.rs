//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use tavola_core::{Cart, Catalog};

use crate::config::MenuConfig;
use crate::error::AppError;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The cart is an explicitly owned store
/// on the state rather than a process-wide global; every mutation goes
/// through the [`Cart`] API under the lock. One cart per process -
/// the demo models a single dining session and keeps nothing across
/// restarts.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MenuConfig,
    catalog: Catalog,
    cart: Mutex<Cart>,
}

impl AppState {
    /// Create a new application state with the sample catalog and an
    /// empty cart.
    #[must_use]
    pub fn new(config: MenuConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::sample(),
                cart: Mutex::new(Cart::new()),
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.inner.config
    }

    /// Get a reference to the menu catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Lock the cart for a synchronous read-modify-write.
    ///
    /// Handlers never hold the guard across an await point.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the lock is poisoned.
    pub fn cart(&self) -> Result<MutexGuard<'_, Cart>, AppError> {
        self.inner
            .cart
            .lock()
            .map_err(|_| AppError::Internal("cart lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavola_core::MenuItemId;

    #[test]
    fn state_clones_share_the_same_cart() {
        let state = AppState::new(MenuConfig::default());
        let clone = state.clone();

        let item = state
            .catalog()
            .get(&MenuItemId::new("1"))
            .expect("sample item")
            .clone();
        state.cart().expect("lock").add_item(&item, 2);

        assert_eq!(clone.cart().expect("lock").total_items(), 2);
    }
}
