//! Main application state and TUI event loop for LuxeMarket.
//!
//! [`App`] is the single writer of the session store. Key presses and
//! [`RuntimeEvent`]s from the scheduler are applied here, one at a time, and
//! every frame is rendered from the store's current state.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use market_core::checkout::CheckoutStep;
use market_core::contact::ContactField;
use market_core::error::{MarketError, Result};
use market_core::session::{SessionContext, SessionEvent, SessionState, SessionStore};
use market_data::Catalog;
use market_runtime::{RuntimeEvent, Scheduler};

use crate::components::cart_drawer::{self, DrawerState};
use crate::components::checkout_modal::{self, CheckoutModal};
use crate::components::navbar::Navbar;
use crate::pages::blog::{self, BlogState};
use crate::pages::contact::{self, ContactFocus, ContactState};
use crate::pages::gallery::{self, GalleryState};
use crate::pages::home::{self, HomeState};
use crate::pages::pricing::{self, PricingState};
use crate::pages::shop::{self, ShopState};
use crate::pages::{services, Page};
use crate::themes::Theme;

/// Notices kept for the status bar.
const MAX_NOTICES: usize = 5;

type Notices = Rc<RefCell<VecDeque<String>>>;

/// Status-bar text for a session change, if it deserves one.
fn describe(event: &SessionEvent, state: &SessionState, catalog: &Catalog) -> Option<String> {
    let title = |id: u32| {
        catalog
            .product(id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| format!("item #{id}"))
    };
    match event {
        SessionEvent::ItemAdded { product_id, quantity } => Some(if *quantity > 1 {
            format!("Added another {} ({quantity} in cart)", title(*product_id))
        } else {
            format!("Added {} to cart", title(*product_id))
        }),
        SessionEvent::ItemRemoved { product_id } => {
            Some(format!("Removed {} from cart", title(*product_id)))
        }
        SessionEvent::QuantityChanged { product_id, quantity } => {
            Some(format!("{} × {quantity}", title(*product_id)))
        }
        SessionEvent::CartCleared { lines } if *lines > 0 => Some(format!(
            "Cart emptied ({lines} line{})",
            if *lines == 1 { "" } else { "s" }
        )),
        SessionEvent::ThemeToggled { .. } => Some(
            if state.dark_mode {
                "Dark theme"
            } else {
                "Light theme"
            }
            .to_string(),
        ),
        SessionEvent::CartCleared { .. } | SessionEvent::DrawerToggled { .. } => None,
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the LuxeMarket TUI.
pub struct App {
    session: SessionContext,
    catalog: &'static Catalog,
    scheduler: Scheduler,
    /// Page currently shown below the navbar.
    pub page: Page,
    pub home: HomeState,
    pub shop: ShopState,
    pub gallery: GalleryState,
    pub blog: BlogState,
    pub pricing: PricingState,
    pub contact: ContactState,
    pub drawer: DrawerState,
    /// Open checkout modal, if any.
    pub checkout: Option<CheckoutModal>,
    notices: Notices,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Build the app around an established session.
    ///
    /// Fails with [`MarketError::SessionNotInitialized`] when `session` has
    /// no store.
    pub fn new(
        mut session: SessionContext,
        catalog: &'static Catalog,
        scheduler: Scheduler,
        start_page: Page,
    ) -> Result<Self> {
        let notices: Notices = Rc::new(RefCell::new(VecDeque::with_capacity(MAX_NOTICES)));
        let sink = Rc::clone(&notices);
        session.store_mut()?.subscribe(move |event, state| {
            if let Some(text) = describe(event, state, catalog) {
                let mut queue = sink.borrow_mut();
                if queue.len() == MAX_NOTICES {
                    queue.pop_front();
                }
                queue.push_back(text);
            }
        });

        Ok(Self {
            session,
            catalog,
            scheduler,
            page: start_page,
            home: HomeState::default(),
            shop: ShopState::default(),
            gallery: GalleryState::default(),
            blog: BlogState::default(),
            pricing: PricingState::default(),
            contact: ContactState::default(),
            drawer: DrawerState::default(),
            checkout: None,
            notices,
            should_quit: false,
        })
    }

    pub fn store(&self) -> Result<&SessionStore> {
        self.session.store()
    }

    /// Most recent status-bar notice.
    pub fn latest_notice(&self) -> Option<String> {
        self.notices.borrow().back().cloned()
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the storefront TUI, applying scheduler events received on `rx`.
    ///
    /// Uses `crossterm::event::poll` with a short timeout so that timer
    /// events arriving on the channel are picked up promptly. The loop exits
    /// on `q` or `Ctrl+C`; the terminal is restored either way.
    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<RuntimeEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        info!(page = self.page.title(), "storefront started");
        let result = self.event_loop(&mut terminal, &mut rx).await;

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!("storefront closed");
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: &mut mpsc::UnboundedReceiver<RuntimeEvent>,
    ) -> Result<()> {
        let tick_rate = Duration::from_millis(100);

        loop {
            terminal
                .draw(|frame| self.render(frame))
                .map_err(|e| MarketError::Terminal(e.to_string()))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }

            // Drain any pending timer events (non-blocking).
            loop {
                match rx.try_recv() {
                    Ok(event) => self.handle_runtime_event(event)?,
                    Err(mpsc::error::TryRecvError::Empty) => break,
                    Err(mpsc::error::TryRecvError::Disconnected) => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
            tokio::task::yield_now().await;
        }
    }

    // ── Runtime events ────────────────────────────────────────────────────────

    /// Apply a timer event. Events whose ticket does not belong to the live
    /// flow are ignored.
    pub fn handle_runtime_event(&mut self, event: RuntimeEvent) -> Result<()> {
        match event {
            RuntimeEvent::PaymentSettled(_) => {
                let Some(modal) = self.checkout.as_mut().filter(|m| m.owns(&event)) else {
                    debug!(?event, "stale payment event ignored");
                    return Ok(());
                };
                modal.task = None;
                modal.flow.complete(self.session.store_mut()?);
                self.drawer.selected = 0;
            }
            RuntimeEvent::ContactDelivered(_) => {
                if !self.contact.task.as_ref().is_some_and(|t| t.owns(&event)) {
                    debug!(?event, "stale contact event ignored");
                    return Ok(());
                }
                self.contact.task = None;
                if self.contact.flow.complete() {
                    self.contact.focus = ContactFocus::Field(ContactField::Name);
                    self.contact.task = Some(self.scheduler.reset_contact());
                }
            }
            RuntimeEvent::ContactReset(_) => {
                if !self.contact.task.as_ref().is_some_and(|t| t.owns(&event)) {
                    debug!(?event, "stale contact event ignored");
                    return Ok(());
                }
                self.contact.task = None;
                self.contact.flow.reset();
            }
        }
        Ok(())
    }

    // ── Keys ──────────────────────────────────────────────────────────────────

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }
        if self.checkout.is_some() {
            return self.checkout_key(key);
        }
        if self.text_input_key(key) {
            return Ok(());
        }
        if self.session.store()?.is_cart_open() && self.drawer_key(key)? {
            return Ok(());
        }
        if self.overlay_key(key)? {
            return Ok(());
        }
        if self.global_key(key)? {
            return Ok(());
        }
        self.page_key(key)
    }

    fn checkout_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(modal) = self.checkout.as_mut() else {
            return Ok(());
        };
        match modal.flow.step() {
            CheckoutStep::Form => match key.code {
                KeyCode::Esc => self.close_checkout(),
                KeyCode::Tab | KeyCode::Down => modal.focus = modal.focus.next(),
                KeyCode::BackTab | KeyCode::Up => modal.focus = modal.focus.prev(),
                KeyCode::Backspace => modal.backspace(),
                KeyCode::Enter => {
                    if modal.pay() {
                        modal.task = Some(self.scheduler.settle_payment());
                    }
                }
                KeyCode::Char(ch) => modal.type_char(ch),
                _ => {}
            },
            CheckoutStep::Processing => {
                if key.code == KeyCode::Esc {
                    self.close_checkout();
                }
            }
            CheckoutStep::Success => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.close_checkout();
                }
            }
        }
        Ok(())
    }

    /// Dropping the modal cancels a payment still in flight.
    fn close_checkout(&mut self) {
        if let Some(modal) = self.checkout.take() {
            if modal.flow.step() == CheckoutStep::Processing {
                info!("checkout cancelled while processing");
            }
        }
    }

    fn open_checkout(&mut self) -> Result<()> {
        let store = self.session.store_mut()?;
        if store.cart().is_empty() {
            return Ok(());
        }
        store.set_cart_open(false);
        info!(total = %store.cart_total(), "checkout opened");
        self.checkout = Some(CheckoutModal::new());
        Ok(())
    }

    /// Keys consumed by an active text box. Returns `true` when handled.
    fn text_input_key(&mut self, key: KeyEvent) -> bool {
        if self.page == Page::Shop && self.shop.searching {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.shop.searching = false,
                KeyCode::Backspace => self.shop.pop_query(),
                KeyCode::Char(ch) => self.shop.push_query(ch),
                _ => return false,
            }
            return true;
        }
        if self.page == Page::Contact && self.contact.editing {
            let Some(field) = self.contact.focused_field() else {
                self.contact.editing = false;
                return false;
            };
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.contact.editing = false,
                KeyCode::Tab => self.contact.focus = self.contact.focus.next(),
                KeyCode::Backspace => self.contact.flow.backspace(field),
                KeyCode::Char(ch) => self.contact.flow.type_char(field, ch),
                _ => return false,
            }
            if self.contact.focused_field().is_none() {
                self.contact.editing = false;
            }
            return true;
        }
        false
    }

    fn drawer_key(&mut self, key: KeyEvent) -> Result<bool> {
        let store = self.session.store_mut()?;
        let selected = self.drawer.selected_line(store.cart()).map(|l| (l.id, l.quantity));
        match key.code {
            KeyCode::Up => self.drawer.move_selection(-1, store.cart()),
            KeyCode::Down => self.drawer.move_selection(1, store.cart()),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some((id, qty)) = selected {
                    store.update_quantity(id, i64::from(qty) + 1);
                }
            }
            KeyCode::Char('-') => {
                if let Some((id, qty)) = selected {
                    store.update_quantity(id, i64::from(qty) - 1);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some((id, _)) = selected {
                    store.remove_from_cart(id);
                    self.drawer.clamp(store.cart());
                }
            }
            KeyCode::Char('x') | KeyCode::Enter => self.open_checkout()?,
            KeyCode::Esc | KeyCode::Char('c') => store.set_cart_open(false),
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Keys for page overlays (quick view, lightbox, reader).
    fn overlay_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.page {
            Page::Shop if self.shop.quick_view.is_some() => match key.code {
                KeyCode::Esc => self.shop.quick_view = None,
                KeyCode::Char('a') | KeyCode::Enter => {
                    let product = self.shop.quick_view.take().and_then(|id| self.catalog.product(id));
                    if let Some(product) = product {
                        self.session.store_mut()?.add_to_cart(product);
                    }
                }
                _ => return Ok(false),
            },
            Page::Gallery if self.gallery.lightbox => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.gallery.lightbox = false,
                KeyCode::Left => self.gallery.move_selection(-1, self.catalog),
                KeyCode::Right => self.gallery.move_selection(1, self.catalog),
                _ => return Ok(false),
            },
            Page::Blog if self.blog.reading.is_some() => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.blog.reading = None,
                _ => return Ok(false),
            },
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn global_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.session.store_mut()?.toggle_theme(),
            KeyCode::Char('c') => {
                let store = self.session.store_mut()?;
                let open = store.is_cart_open();
                store.set_cart_open(!open);
                self.drawer.clamp(store.cart());
            }
            KeyCode::Char(ch) => match Page::from_hotkey(ch) {
                Some(page) => self.navigate(page),
                None => return Ok(false),
            },
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Switch pages. Leaving the contact page discards its form and timers.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        if self.page == Page::Contact {
            self.contact = ContactState::default();
        }
        debug!(from = self.page.title(), to = page.title(), "navigate");
        self.page = page;
    }

    fn page_key(&mut self, key: KeyEvent) -> Result<()> {
        let catalog = self.catalog;
        match self.page {
            Page::Home => match key.code {
                KeyCode::Up => self.home.move_selection(-1, catalog),
                KeyCode::Down => self.home.move_selection(1, catalog),
                KeyCode::Char('a') | KeyCode::Enter => {
                    if let Some(product) = self.home.selected_product(catalog) {
                        self.session.store_mut()?.add_to_cart(product);
                    }
                }
                _ => {}
            },
            Page::Shop => match key.code {
                KeyCode::Up => self.shop.move_selection(-1, catalog),
                KeyCode::Down => self.shop.move_selection(1, catalog),
                KeyCode::Char('/') => self.shop.searching = true,
                KeyCode::Tab => self.shop.cycle_category(catalog),
                KeyCode::Enter => self.shop.open_quick_view(catalog),
                KeyCode::Char('a') => {
                    if let Some(product) = self.shop.selected_product(catalog) {
                        self.session.store_mut()?.add_to_cart(product);
                    }
                }
                _ => {}
            },
            Page::Gallery => match key.code {
                KeyCode::Left => self.gallery.move_selection(-1, catalog),
                KeyCode::Right => self.gallery.move_selection(1, catalog),
                KeyCode::Up => self.gallery.move_selection(-(gallery::COLUMNS as isize), catalog),
                KeyCode::Down => self.gallery.move_selection(gallery::COLUMNS as isize, catalog),
                KeyCode::Enter => self.gallery.open(catalog),
                _ => {}
            },
            Page::Blog => match key.code {
                KeyCode::Up => self.blog.move_selection(-1, catalog),
                KeyCode::Down => self.blog.move_selection(1, catalog),
                KeyCode::Enter => self.blog.open(catalog),
                _ => {}
            },
            Page::Services => {}
            Page::Pricing => match key.code {
                KeyCode::Left | KeyCode::Up => self.pricing.move_selection(-1, catalog),
                KeyCode::Right | KeyCode::Down => self.pricing.move_selection(1, catalog),
                _ => {}
            },
            Page::Contact => self.contact_key(key),
        }
        Ok(())
    }

    fn contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::BackTab => self.contact.focus = self.contact.focus.prev(),
            KeyCode::Down | KeyCode::Tab => self.contact.focus = self.contact.focus.next(),
            KeyCode::Enter => match self.contact.focus {
                ContactFocus::Field(_) => self.contact.editing = true,
                ContactFocus::Send => {
                    if self.contact.flow.submit() {
                        info!("contact message submitted");
                        self.contact.task = Some(self.scheduler.deliver_contact());
                    }
                }
            },
            _ => {}
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let Ok(store) = self.session.store() else {
            return;
        };
        let theme = Theme::for_session(store.is_dark_mode());
        let area = frame.area();
        let [nav, body, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let navbar = Navbar::new(self.page, store.item_count(), store.is_dark_mode(), &theme);
        frame.render_widget(
            Paragraph::new(navbar.to_lines()).block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(theme.border),
            ),
            nav,
        );

        self.render_page(frame, body, &theme);

        if store.is_cart_open() {
            cart_drawer::render(frame, body, store.cart(), store.cart_total(), &self.drawer, &theme);
        }
        if let Some(modal) = &self.checkout {
            checkout_modal::render(frame, area, modal, store.cart_total(), &theme);
        }

        self.render_status(frame, status, store, &theme);
    }

    fn render_page(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let catalog = self.catalog;
        match self.page {
            Page::Home => home::render(frame, area, catalog, &self.home, theme),
            Page::Shop => shop::render(frame, area, catalog, &self.shop, theme),
            Page::Gallery => gallery::render(frame, area, catalog, &self.gallery, theme),
            Page::Blog => blog::render(frame, area, catalog, &self.blog, theme),
            Page::Services => services::render(frame, area, catalog, theme),
            Page::Pricing => pricing::render(frame, area, catalog, &self.pricing, theme),
            Page::Contact => contact::render(frame, area, &self.contact, theme),
        }
    }

    fn key_hints(&self, store: &SessionStore) -> &'static str {
        if self.checkout.is_some() {
            return "Esc close";
        }
        if store.is_cart_open() {
            return "↑↓ select  +/- qty  d remove  x checkout  Esc close";
        }
        match self.page {
            Page::Shop if self.shop.searching => "type to search  Enter/Esc done",
            Page::Shop => "↑↓ move  a add  Enter quick view  / search  Tab category",
            Page::Home => "↑↓ move  a add to cart",
            Page::Gallery | Page::Blog => "arrows move  Enter open  Esc close",
            Page::Pricing => "←→ choose plan",
            Page::Contact if self.contact.editing => "type  Tab next  Enter/Esc done",
            Page::Contact => "↑↓ focus  Enter edit/send",
            Page::Services => "",
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, store: &SessionStore, theme: &Theme) {
        let mut spans = vec![Span::styled(
            " 1-7 pages  t theme  c cart  q quit ",
            theme.dim,
        )];
        let hints = self.key_hints(store);
        if !hints.is_empty() {
            spans.push(Span::styled("│ ", theme.separator));
            spans.push(Span::styled(hints, theme.dim));
        }
        if let Some(notice) = self.latest_notice() {
            spans.push(Span::styled("  │ ", theme.separator));
            spans.push(Span::styled(notice, theme.info));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
