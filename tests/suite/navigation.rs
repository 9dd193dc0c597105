//! Scroll, scroll spy, overlay menu, and carousel behavior at the app level.

use terra_types::{NavAction, PageId, SectionId};

use crate::common::relay_app;

// The relay is never contacted in these tests; an unroutable address keeps
// any accidental dispatch from silently succeeding.
const DEAD_RELAY: &str = "http://127.0.0.1:9";

#[test]
fn scrolling_down_walks_the_sections_in_order() {
    let mut app = relay_app(DEAD_RELAY);
    assert_eq!(app.active_section(), SectionId::Home);
    assert!(!app.is_scrolled());

    let mut seen = vec![app.active_section()];
    for _ in 0..170 {
        app.scroll_lines(1);
        app.tick();
        let active = app.active_section();
        if *seen.last().unwrap() != active {
            seen.push(active);
        }
    }
    assert_eq!(seen, SectionId::ALL.to_vec());
    assert!(app.is_scrolled());
}

#[test]
fn page_navigation_jumps_above_the_section_heading() {
    let mut app = relay_app(DEAD_RELAY);
    app.navigate(NavAction::NavigateToPage(PageId::Services));
    // Section top 100, less the fixed nav bar rows.
    assert_eq!(app.scroll_offset(), 98);
    assert_eq!(app.active_section(), SectionId::Services);
}

#[test]
fn section_scroll_eases_instead_of_jumping() {
    let mut app = relay_app(DEAD_RELAY);
    app.navigate(NavAction::ScrollToSection(SectionId::Contact));
    // The eased variant does not teleport; the first frames sit well short
    // of the target.
    assert!(app.scroll_offset() < 100);
}

#[test]
fn open_menu_suppresses_scroll_and_every_exit_releases_it() {
    let mut app = relay_app(DEAD_RELAY);
    app.toggle_menu();
    assert!(app.menu().is_open());
    assert!(app.menu().scroll_locked());

    app.scroll_lines(25);
    assert_eq!(app.scroll_offset(), 0);

    // Selecting an item closes the menu, releases the lock, and navigates.
    app.menu_select_next();
    app.menu_activate();
    assert!(!app.menu().is_open());
    assert!(!app.menu().scroll_locked());
    assert_eq!(app.active_section(), SectionId::About);

    // Dismissal releases too.
    app.toggle_menu();
    app.close_menu();
    assert!(!app.menu().scroll_locked());
    app.scroll_lines(5);
    assert_ne!(app.scroll_offset(), 0);
}

#[test]
fn carousel_wraps_and_rejects_out_of_range_jumps() {
    let mut app = relay_app(DEAD_RELAY);
    let len = app.carousel().len();
    assert!(len > 1);

    app.carousel_previous();
    assert_eq!(app.carousel().index(), len - 1);
    app.carousel_next();
    assert_eq!(app.carousel().index(), 0);

    assert!(app.carousel_goto(len - 1));
    assert!(!app.carousel_goto(len));
    assert_eq!(app.carousel().index(), len - 1);
}
