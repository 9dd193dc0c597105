//! Core engine for Terra - state machine and orchestration.
//!
//! This crate owns all UI state without any rendering dependencies: the
//! scroll position and scroll spy, the overlay menu and its scroll lock, the
//! carousel, the contact form submission machine, and the particle field.
//! The renderer pushes the per-frame document layout in and reads state out;
//! the binary drives `tick()` and `process_mail_events()` from its frame loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

mod config;
mod contact;
pub mod content;
mod menu;
mod particles;
mod scroll;


pub use config::{AppConfig, ConfigError, EmailJsConfig, TerraConfig};
pub use contact::{ContactFormState, MailEvent};
pub use menu::MobileMenu;
pub use particles::{FieldConfig, Link, Particle, ParticleField};
pub use scroll::{
    DocumentLayout, NAV_SCROLL_OFFSET, ScrollSpy, ScrollState, SectionExtent,
};

pub use terra_mailer::{EmailRelay, MailDispatch, MailError, RelayCredentials};
pub use terra_types::{
    CarouselState, ContactField, ContactForm, MailPayload, NavAction, PageId, SectionId,
    SubmissionStatus, UiOptions,
};

/// Terminal widths below this get the mobile-style overlay menu.
pub const COMPACT_WIDTH: u16 = 70;

/// Braille dot density of a terminal cell.
const DOTS_PER_COL: f64 = 2.0;
const DOTS_PER_ROW: f64 = 4.0;

/// What keyboard input currently drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Scrolling the document, carousel, navigation.
    #[default]
    Browse,
    /// Editing the contact form fields.
    Form,
}

/// Top-level application state.
pub struct App {
    options: UiOptions,
    input_mode: InputMode,
    should_quit: bool,

    scroll: ScrollState,
    spy: ScrollSpy,
    layout: DocumentLayout,
    viewport: (u16, u16),

    menu: MobileMenu,
    carousel: CarouselState,
    contact: ContactFormState,
    particles: Option<ParticleField>,

    dispatch: Arc<dyn MailDispatch>,
    mail_tx: mpsc::UnboundedSender<MailEvent>,
    mail_rx: mpsc::UnboundedReceiver<MailEvent>,

    last_frame: Instant,
    frame_count: u64,
}

impl App {
    /// Build the app against the hosted mail relay.
    pub fn new(config: &TerraConfig) -> anyhow::Result<Self> {
        let relay = EmailRelay::new(config.relay_credentials())?;
        Ok(Self::with_dispatch(config.ui_options(), Arc::new(relay)))
    }

    /// Build the app with an explicit mail-dispatch collaborator.
    #[must_use]
    pub fn with_dispatch(options: UiOptions, dispatch: Arc<dyn MailDispatch>) -> Self {
        let (mail_tx, mail_rx) = mpsc::unbounded_channel();
        Self {
            options,
            input_mode: InputMode::default(),
            should_quit: false,
            scroll: ScrollState::default(),
            spy: ScrollSpy::default(),
            layout: DocumentLayout::default(),
            viewport: (0, 0),
            menu: MobileMenu::default(),
            carousel: CarouselState::new(content::FEATURED.len()),
            contact: ContactFormState::default(),
            particles: None,
            dispatch,
            mail_tx,
            mail_rx,
            last_frame: Instant::now(),
            frame_count: 0,
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ========================================================================
    // Frame driving
    // ========================================================================

    /// Advance all time-driven state by one frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count = self.frame_count.wrapping_add(1);
        self.advance(delta, now);
    }

    /// Monotonic frame counter, used to phase spinner animations.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn advance(&mut self, delta: Duration, now: Instant) {
        self.scroll.tick(delta);
        self.contact.tick(now);

        if !self.options.reduced_motion
            && let Some(field) = &mut self.particles
        {
            field.tick();
        }

        self.update_spy();
    }

    /// Drain dispatch outcomes reported by spawned send tasks.
    pub fn process_mail_events(&mut self) {
        let now = Instant::now();
        while let Ok(event) = self.mail_rx.try_recv() {
            self.contact.apply_event(event, now);
        }
    }

    // ========================================================================
    // Layout and scrolling
    // ========================================================================

    /// Push the per-frame document layout and content viewport (in cells).
    ///
    /// Called by the renderer before painting; re-bounds the scroll range,
    /// the particle surface, and the scroll spy.
    pub fn set_layout(&mut self, layout: DocumentLayout, viewport: (u16, u16)) {
        let (width, height) = viewport;
        self.scroll.set_max(layout.total_height().saturating_sub(height));
        self.layout = layout;
        self.viewport = viewport;

        let dots_w = f64::from(width) * DOTS_PER_COL;
        let dots_h = f64::from(height) * DOTS_PER_ROW;
        if self.options.reduced_motion || width == 0 || height == 0 {
            // No drawable surface: silently skip the field.
            self.particles = None;
        } else {
            match &mut self.particles {
                Some(field) => {
                    if (field.width() - dots_w).abs() > f64::EPSILON
                        || (field.height() - dots_h).abs() > f64::EPSILON
                    {
                        field.resize(dots_w, dots_h);
                    }
                }
                None => self.particles = Some(ParticleField::new(dots_w, dots_h)),
            }
        }

        self.update_spy();
    }

    fn update_spy(&mut self) {
        if let Some(section) = self.spy.update(
            &self.layout,
            self.scroll.offset_rows(),
            self.viewport.1,
        ) {
            tracing::debug!(section = section.anchor(), "active section changed");
        }
    }

    #[must_use]
    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }

    #[must_use]
    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset_rows()
    }

    /// Nav bar switches to its panel treatment once scrolled.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_scrolled()
    }

    /// The nav item to highlight, from the scroll spy.
    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.spy.active().unwrap_or(SectionId::Home)
    }

    /// Relative scroll from user input; suppressed while the menu is open.
    pub fn scroll_lines(&mut self, delta: i32) {
        if self.menu.scroll_locked() {
            return;
        }
        self.scroll.scroll_by(delta);
    }

    pub fn scroll_page(&mut self, direction: i32) {
        let page = i32::from(self.viewport.1.max(1));
        self.scroll_lines(direction * page);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Handle a navigation request from the shell or page content.
    ///
    /// Selecting any navigation target closes the overlay menu as a side
    /// effect, which also releases the scroll lock.
    pub fn navigate(&mut self, action: NavAction) {
        self.menu.close();
        match action {
            NavAction::NavigateToPage(page) => {
                if let Some(top) = self.layout.section_top(page.section()) {
                    self.scroll.jump_to(top.saturating_sub(NAV_SCROLL_OFFSET));
                }
            }
            NavAction::ScrollToSection(section) => {
                if let Some(top) = self.layout.section_top(section) {
                    self.scroll
                        .scroll_to(top.saturating_sub(NAV_SCROLL_OFFSET), self.options.reduced_motion);
                }
            }
        }
        self.update_spy();
    }

    // ========================================================================
    // Overlay menu
    // ========================================================================

    #[must_use]
    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    pub fn menu_select_next(&mut self) {
        self.menu.select_next();
    }

    pub fn menu_select_previous(&mut self) {
        self.menu.select_previous();
    }

    /// Activate the highlighted menu item (page-switch semantics).
    pub fn menu_activate(&mut self) {
        if let Some(page) = self.menu.selected() {
            self.navigate(NavAction::NavigateToPage(page));
        }
    }

    // ========================================================================
    // Carousel
    // ========================================================================

    #[must_use]
    pub fn carousel(&self) -> CarouselState {
        self.carousel
    }

    pub fn carousel_next(&mut self) {
        self.carousel.next();
    }

    pub fn carousel_previous(&mut self) {
        self.carousel.previous();
    }

    pub fn carousel_goto(&mut self, index: usize) -> bool {
        self.carousel.goto(index)
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    #[must_use]
    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    /// Direct form access for automated fills (tests, honeypot probes).
    pub fn contact_mut(&mut self) -> &mut ContactFormState {
        &mut self.contact
    }

    /// Switch keyboard input to the form and bring the contact section into
    /// view.
    pub fn enter_form_mode(&mut self) {
        self.input_mode = InputMode::Form;
        self.navigate(NavAction::ScrollToSection(SectionId::Contact));
    }

    pub fn leave_form_mode(&mut self) {
        self.input_mode = InputMode::Browse;
    }

    pub fn form_focus_next(&mut self) {
        self.contact.focus_next();
    }

    pub fn form_focus_previous(&mut self) {
        self.contact.focus_previous();
    }

    pub fn form_input(&mut self, c: char) {
        self.contact.input_char(c);
    }

    pub fn form_backspace(&mut self) {
        self.contact.backspace();
    }

    /// Submit the form. Returns `true` when a dispatch task was spawned.
    pub fn submit_form(&mut self) -> bool {
        self.contact
            .submit(&self.dispatch, &self.mail_tx, Instant::now())
    }

    // ========================================================================
    // Particle field
    // ========================================================================

    /// The hero background field, absent under reduced motion or before the
    /// first layout.
    #[must_use]
    pub fn particles(&self) -> Option<&ParticleField> {
        self.particles.as_ref()
    }
}
