//! Compact-width overlay menu with a scoped scroll lock.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use terra_types::PageId;

/// Guard for background-scroll suppression while the overlay menu is open.
///
/// The flag is set on acquire and cleared on drop, so every exit path -
/// selecting an item, dismissing the menu, or tearing the app down - releases
/// the suppression. A stuck lock is impossible without leaking the guard.
#[derive(Debug)]
struct ScrollLock {
    flag: Arc<AtomicBool>,
}

impl ScrollLock {
    fn acquire(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::Release);
        Self { flag: Arc::clone(flag) }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[derive(Debug)]
struct OpenMenu {
    selected: usize,
    _lock: ScrollLock,
}

/// Open/closed state of the mobile-style overlay menu.
#[derive(Debug)]
pub struct MobileMenu {
    locked: Arc<AtomicBool>,
    open: Option<OpenMenu>,
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self {
            locked: Arc::new(AtomicBool::new(false)),
            open: None,
        }
    }
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Whether background scrolling is currently suppressed.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    pub fn open(&mut self) {
        if self.open.is_none() {
            self.open = Some(OpenMenu {
                selected: 0,
                _lock: ScrollLock::acquire(&self.locked),
            });
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<PageId> {
        self.open.as_ref().map(|m| PageId::ALL[m.selected])
    }

    pub fn select_next(&mut self) {
        if let Some(menu) = &mut self.open {
            menu.selected = (menu.selected + 1) % PageId::ALL.len();
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(menu) = &mut self.open {
            menu.selected = (menu.selected + PageId::ALL.len() - 1) % PageId::ALL.len();
        }
    }
}
