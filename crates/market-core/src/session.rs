//! Session state manager.
//!
//! [`SessionStore`] is the single owner of the mutable per-process state: the
//! cart, the cart-drawer flag and the dark-theme flag. Every mutation runs to
//! completion before returning and then notifies subscribers synchronously.
//!
//! [`SessionContext`] is the slot a store is provided into at startup. Reading
//! through an empty context is a configuration error rather than a silent
//! default.

use serde::{Deserialize, Serialize};

use crate::cart::{AddOutcome, Cart};
use crate::error::{MarketError, Result};
use crate::models::{Money, Product};

// ── State ─────────────────────────────────────────────────────────────────────

/// The mutable, process-lifetime state shared across all views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub cart: Cart,
    /// Whether the cart drawer is visible.
    pub cart_open: bool,
    /// Whether the dark palette is active.
    pub dark_mode: bool,
}

/// What changed in a mutation, delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A product was added; `quantity` is the line's quantity afterwards.
    ItemAdded { product_id: u32, quantity: u32 },
    ItemRemoved { product_id: u32 },
    QuantityChanged { product_id: u32, quantity: u32 },
    /// The cart was emptied; `lines` is how many lines were dropped.
    CartCleared { lines: usize },
    DrawerToggled { open: bool },
    ThemeToggled { dark: bool },
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SessionEvent, &SessionState)>;

// ── SessionStore ──────────────────────────────────────────────────────────────

/// Single authoritative owner of [`SessionState`].
pub struct SessionStore {
    state: SessionState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SessionStore {
    /// Empty cart, drawer closed, light theme.
    pub fn new() -> Self {
        Self::with_theme(false)
    }

    /// Empty cart and closed drawer with the given initial theme.
    pub fn with_theme(dark_mode: bool) -> Self {
        Self {
            state: SessionState {
                dark_mode,
                ..SessionState::default()
            },
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    /// Σ price × quantity over the current lines.
    pub fn cart_total(&self) -> Money {
        self.state.cart.total()
    }

    /// Σ quantity over the current lines (the navbar badge).
    pub fn item_count(&self) -> u32 {
        self.state.cart.item_count()
    }

    pub fn is_cart_open(&self) -> bool {
        self.state.cart_open
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.dark_mode
    }

    // ── Intents ───────────────────────────────────────────────────────────────

    /// Add one unit of `product` and open the drawer.
    pub fn add_to_cart(&mut self, product: &Product) {
        let quantity = match self.state.cart.add(product) {
            AddOutcome::Inserted => 1,
            AddOutcome::Incremented(q) => q,
        };
        tracing::debug!(product_id = product.id, quantity, "added to cart");
        self.notify(SessionEvent::ItemAdded {
            product_id: product.id,
            quantity,
        });
        self.set_cart_open(true);
    }

    /// Remove the line for `product_id`; unknown ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: u32) {
        if self.state.cart.remove(product_id).is_some() {
            tracing::debug!(product_id, "removed from cart");
            self.notify(SessionEvent::ItemRemoved { product_id });
        }
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// Values below 1 leave the line untouched; they do not remove it. Use
    /// [`SessionStore::remove_from_cart`] for that.
    pub fn update_quantity(&mut self, product_id: u32, quantity: i64) {
        if self.state.cart.set_quantity(product_id, quantity) {
            let quantity = self
                .state
                .cart
                .line(product_id)
                .map(|l| l.quantity)
                .unwrap_or_default();
            tracing::debug!(product_id, quantity, "quantity updated");
            self.notify(SessionEvent::QuantityChanged {
                product_id,
                quantity,
            });
        }
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        let lines = self.state.cart.clear();
        if lines > 0 {
            tracing::debug!(lines, "cart cleared");
            self.notify(SessionEvent::CartCleared { lines });
        }
    }

    /// Show or hide the cart drawer. Cart contents are untouched.
    pub fn set_cart_open(&mut self, open: bool) {
        if self.state.cart_open != open {
            self.state.cart_open = open;
            self.notify(SessionEvent::DrawerToggled { open });
        }
    }

    /// Flip between the light and dark palettes.
    pub fn toggle_theme(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        tracing::debug!(dark = self.state.dark_mode, "theme toggled");
        self.notify(SessionEvent::ThemeToggled {
            dark: self.state.dark_mode,
        });
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    /// Register `listener` to be called after every state change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SessionEvent, &SessionState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: SessionEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event, &self.state);
        }
    }
}

// ── SessionContext ────────────────────────────────────────────────────────────

/// The slot through which views reach the session store.
///
/// Constructed empty or established with a store at startup. Access through
/// an empty context fails with [`MarketError::SessionNotInitialized`].
#[derive(Debug, Default)]
pub struct SessionContext {
    store: Option<SessionStore>,
}

impl SessionContext {
    /// A context with no store provided yet.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// A context that owns `store`.
    pub fn establish(store: SessionStore) -> Self {
        Self { store: Some(store) }
    }

    /// Provide (or replace) the store.
    pub fn provide(&mut self, store: SessionStore) {
        self.store = Some(store);
    }

    pub fn is_established(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Result<&SessionStore> {
        self.store.as_ref().ok_or(MarketError::SessionNotInitialized)
    }

    pub fn store_mut(&mut self) -> Result<&mut SessionStore> {
        self.store.as_mut().ok_or(MarketError::SessionNotInitialized)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
