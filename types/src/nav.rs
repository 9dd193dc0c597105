//! Navigation targets.
//!
//! The shell supports two navigation styles: a discrete page switch and a
//! smooth scroll to an anchored section. Rather than accepting either kind of
//! callback by convention, navigation is one explicit variant type with two
//! constructors, so the shell's contract is total.

/// Discrete page identifiers, as presented in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Home,
    About,
    Services,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 4] = [PageId::Home, PageId::About, PageId::Services, PageId::Contact];

    /// Display label for the nav bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Services => "Services",
            PageId::Contact => "Contact",
        }
    }

    /// The document section this page maps onto.
    #[must_use]
    pub const fn section(self) -> SectionId {
        match self {
            PageId::Home => SectionId::Home,
            PageId::About => SectionId::About,
            PageId::Services => SectionId::Services,
            PageId::Contact => SectionId::Contact,
        }
    }
}

/// Anchored section identifiers, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Services,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Contact,
    ];

    /// Anchor name, matching the section ids of the adventterra.com site.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Contact => "contact",
        }
    }

    /// The nav item that should highlight when this section is active.
    #[must_use]
    pub const fn page(self) -> PageId {
        match self {
            SectionId::Home => PageId::Home,
            SectionId::About => PageId::About,
            SectionId::Services => PageId::Services,
            SectionId::Contact => PageId::Contact,
        }
    }
}

/// A navigation request issued by the shell or by page content.
///
/// `NavigateToPage` jumps directly to the top of the page's section;
/// `ScrollToSection` requests an eased smooth scroll to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    NavigateToPage(PageId),
    ScrollToSection(SectionId),
}
