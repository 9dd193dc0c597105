//! Document scrolling and the section scroll spy.

use std::time::Duration;

use terra_types::{EffectTimer, SectionId, ease_out_cubic};

/// Rows reserved for the fixed navigation bar; anchor scrolls land this far
/// above the section top so the heading is not hidden behind the bar.
pub const NAV_SCROLL_OFFSET: u16 = 2;

const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Vertical extent of one section within the document, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

/// Per-frame layout of the full document, computed by the renderer from the
/// current viewport width and pushed into the engine.
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    sections: Vec<SectionExtent>,
    total_height: u16,
}

impl DocumentLayout {
    #[must_use]
    pub fn new(sections: Vec<SectionExtent>) -> Self {
        let total_height = sections
            .iter()
            .map(|s| u32::from(s.top) + u32::from(s.height))
            .max()
            .unwrap_or(0)
            .min(u32::from(u16::MAX)) as u16;
        Self {
            sections,
            total_height,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionExtent] {
        &self.sections
    }

    #[must_use]
    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    #[must_use]
    pub fn section_top(&self, id: SectionId) -> Option<u16> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }
}

#[derive(Debug)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    timer: EffectTimer,
}

/// Scroll position over the document, with optional eased motion.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: f32,
    max: f32,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    /// Current offset in whole rows.
    #[must_use]
    pub fn offset_rows(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    /// Whether the document has been scrolled away from the top. Drives the
    /// nav bar's panel treatment and hides the hero scroll indicator.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.offset > 0.5
    }

    /// Clamp ceiling update; also clamps the current offset after a resize.
    pub fn set_max(&mut self, max_rows: u16) {
        self.max = f32::from(max_rows);
        if self.offset > self.max {
            self.offset = self.max;
        }
    }

    /// Relative scroll from user input. Cancels any smooth scroll in flight:
    /// the user's hand always wins over an easing animation.
    pub fn scroll_by(&mut self, delta_rows: i32) {
        self.animation = None;
        self.offset = (self.offset + delta_rows as f32).clamp(0.0, self.max);
    }

    /// Instant jump, as used by the discrete page-switch navigation variant.
    pub fn jump_to(&mut self, row: u16) {
        self.animation = None;
        self.offset = f32::from(row).clamp(0.0, self.max);
    }

    /// Eased scroll toward `row`. Falls back to a jump under reduced motion.
    pub fn scroll_to(&mut self, row: u16, reduced_motion: bool) {
        if reduced_motion {
            self.jump_to(row);
            return;
        }
        let to = f32::from(row).clamp(0.0, self.max);
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            timer: EffectTimer::new(SMOOTH_SCROLL_DURATION),
        });
    }

    /// Advance the easing animation by one frame delta.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(animation) = &mut self.animation {
            animation.timer.advance(delta);
            let t = ease_out_cubic(animation.timer.progress());
            self.offset =
                (animation.from + (animation.to - animation.from) * t).clamp(0.0, self.max);
            if animation.timer.is_finished() {
                self.animation = None;
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

/// Determines which section intersects the vertical midline of the viewport.
///
/// Policy: enumeration order, last writer wins. With short sections this can
/// flicker between adjacent entries; that imprecision is accepted, not
/// corrected by a distance-to-center tiebreak.
///
/// The spy is owned by the `App` and dies with it, so it cannot report after
/// teardown.
#[derive(Debug, Default)]
pub struct ScrollSpy {
    active: Option<SectionId>,
}

impl ScrollSpy {
    /// Re-evaluate against the current layout and scroll position.
    /// Returns the newly active section only on a transition.
    pub fn update(
        &mut self,
        layout: &DocumentLayout,
        offset_rows: u16,
        viewport_height: u16,
    ) -> Option<SectionId> {
        let midline = u32::from(offset_rows) + u32::from(viewport_height) / 2;

        let mut hit = None;
        for section in layout.sections() {
            let top = u32::from(section.top);
            let bottom = top + u32::from(section.height);
            if midline >= top && midline < bottom {
                hit = Some(section.id);
            }
        }

        if hit.is_some() && hit != self.active {
            self.active = hit;
            return hit;
        }
        None
    }

    #[must_use]
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use terra_types::SectionId;

    use super::{DocumentLayout, ScrollSpy, ScrollState, SectionExtent};

    fn tall_layout() -> DocumentLayout {
        // Three sections, each taller than a 30-row viewport.
        DocumentLayout::new(vec![
            SectionExtent {
                id: SectionId::Home,
                top: 0,
                height: 50,
            },
            SectionExtent {
                id: SectionId::About,
                top: 50,
                height: 50,
            },
            SectionExtent {
                id: SectionId::Services,
                top: 100,
                height: 50,
            },
        ])
    }

    #[test]
    fn scrolling_top_to_bottom_hits_every_section_in_order() {
        let layout = tall_layout();
        let mut spy = ScrollSpy::default();
        let mut transitions = Vec::new();

        for offset in 0..=(layout.total_height() - 30) {
            if let Some(id) = spy.update(&layout, offset, 30) {
                transitions.push(id);
            }
        }

        assert_eq!(
            transitions,
            [SectionId::Home, SectionId::About, SectionId::Services],
            "no section may be skipped and order must be top to bottom"
        );
    }

    #[test]
    fn overlapping_extents_resolve_to_the_last_in_enumeration_order() {
        let layout = DocumentLayout::new(vec![
            SectionExtent {
                id: SectionId::Home,
                top: 0,
                height: 40,
            },
            SectionExtent {
                id: SectionId::About,
                top: 10,
                height: 40,
            },
        ]);
        let mut spy = ScrollSpy::default();
        // Midline 15 sits inside both extents; About wins by enumeration order.
        assert_eq!(spy.update(&layout, 0, 30), Some(SectionId::About));
    }

    #[test]
    fn update_reports_only_transitions() {
        let layout = tall_layout();
        let mut spy = ScrollSpy::default();
        assert_eq!(spy.update(&layout, 0, 30), Some(SectionId::Home));
        assert_eq!(spy.update(&layout, 1, 30), None);
        assert_eq!(spy.active(), Some(SectionId::Home));
    }

    #[test]
    fn smooth_scroll_reaches_target_and_stops() {
        let mut scroll = ScrollState::default();
        scroll.set_max(100);
        scroll.scroll_to(60, false);
        assert!(scroll.is_animating());

        for _ in 0..30 {
            scroll.tick(Duration::from_millis(33));
        }
        assert_eq!(scroll.offset_rows(), 60);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn reduced_motion_scrolls_jump() {
        let mut scroll = ScrollState::default();
        scroll.set_max(100);
        scroll.scroll_to(60, true);
        assert_eq!(scroll.offset_rows(), 60);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn manual_scroll_cancels_animation_and_clamps() {
        let mut scroll = ScrollState::default();
        scroll.set_max(10);
        scroll.scroll_to(8, false);
        scroll.scroll_by(-100);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset_rows(), 0);
        scroll.scroll_by(100);
        assert_eq!(scroll.offset_rows(), 10);
    }
}
