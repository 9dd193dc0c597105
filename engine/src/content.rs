//! Site copy and fixed card data for the brochure.

pub const BRAND_WORDMARK: &str = "A D V E N T   T E R R A";
pub const TAGLINE: &str = "Curating Enduring Legacies in Global Real Estate";
pub const PHILOSOPHY: &str = "People. Process. Product.";
pub const HERO_CTA: &str = "Begin Your Journey";

pub const ABOUT_HEADLINE: [&str; 2] = ["We don't sell properties.", "We curate legacies."];
pub const SERVICES_HEADLINE: [&str; 2] = ["Boutique Advisory for", "Discerning Capital"];
pub const CONTACT_HEADLINE: [&str; 2] = ["Let's discuss", "your legacy."];

pub const ABOUT_STORY: [&str; 4] = [
    "Advent Terra was born from a singular realization: that the world's most \
     sophisticated investors were navigating global real estate markets with tools \
     designed for mass consumption, not strategic precision.",
    "Based in Bengaluru - India's nerve center of innovation and capital - we operate \
     at the intersection of old-world discretion and new-age intelligence. Our team \
     combines backgrounds in private banking, institutional real estate, family office \
     advisory, and technology-driven market analysis.",
    "We are not brokers. We are not agents. We are strategic partners who understand \
     that for our clients, real estate decisions echo across generations. Every \
     recommendation we make carries the weight of that responsibility.",
    "Our mandate is simple: to identify, analyze, and secure properties that meet the \
     highest standards of investment rigor, architectural merit, and legacy potential.",
];

/// A promotional card in the featured-opportunities carousel.
///
/// `image_url` is the remote asset the web site shows; terminals render a
/// framed placeholder in its place, which doubles as the fallback visual for
/// unreachable images.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub location: &'static str,
    pub image_url: &'static str,
}

pub const FEATURED: [Card; 4] = [
    Card {
        title: "Ultra-Luxury Waterfront Residences",
        location: "Singapore",
        image_url: "https://images.unsplash.com/photo-1644025470506-f98ba7b08948",
    },
    Card {
        title: "Investment Grade Portfolio",
        location: "UAE",
        image_url: "https://images.unsplash.com/photo-1657106251952-2d584ebdf886",
    },
    Card {
        title: "Legacy Estate Collection",
        location: "Greece",
        image_url: "https://images.unsplash.com/photo-1599916382059-2968a101a410",
    },
    Card {
        title: "Prime Central Residence",
        location: "UK",
        image_url: "https://images.unsplash.com/photo-1632743441209-8a09b8a37e25",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRINCIPLES: [Principle; 3] = [
    Principle {
        title: "People",
        description: "We serve only those who value discretion, depth, and long-term vision. \
             Our clients are not buyers - they are custodians of capital, architects of \
             legacy, and stewards of generational wealth.",
    },
    Principle {
        title: "Process",
        description: "Our methodology is relentless in its rigor. We deploy proprietary \
             frameworks combining macroeconomic intelligence, geopolitical risk analysis, \
             urban development trajectories, and micro-market dynamics.",
    },
    Principle {
        title: "Product",
        description: "We curate, not catalog. Our portfolio spans global gateway cities and \
             emerging wealth corridors. Each property is vetted for investment pedigree, \
             architectural significance, scarcity, and strategic alignment.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Investment Advisory",
        description: "Bespoke investment strategies for global real estate portfolios, aligned \
             with your risk appetite, return expectations, and generational wealth \
             objectives. From identifying emerging markets to stress-testing legacy \
             holdings, we offer clarity in complexity.",
    },
    Service {
        title: "Portfolio Structuring",
        description: "Tax efficiency, legal structuring, cross-border ownership, and succession \
             planning are woven into every recommendation. We work in concert with your \
             legal, tax, and wealth management advisors.",
    },
    Service {
        title: "Developer Collaborations",
        description: "We partner with world-class developers to bring exclusive, pre-launch, \
             and bespoke opportunities to our clients. Early access, preferential terms, \
             and customization privileges are standard.",
    },
    Service {
        title: "Family Office Alignment",
        description: "We understand the unique needs of family offices - confidentiality, \
             multi-generational thinking, values alignment, and impact considerations. \
             We serve as an extension of your office.",
    },
];

pub const HQ_CITY: &str = "Bengaluru";
pub const HQ_ADDRESS: [&str; 3] = [
    "#8, 1st Floor, Indian Express Layout,",
    "Thindlu Kodigehalli, Vidyaranyapura,",
    "Bangalore, Karnataka - 560097, India",
];
pub const PHONE: &str = "+91 9886 43 9886";
pub const EMAIL: &str = "hello@adventterra.com";
pub const APPOINTMENT_NOTE: &str = "By Appointment Only";
pub const GLOBAL_REACH: &str = "Operating across India \u{2022} Dubai \u{2022} France";
pub const CONFIDENTIALITY_NOTE: &str = "All communications are treated with the utmost confidentiality. We operate under \
     strict non-disclosure protocols and never disclose client relationships or \
     transaction details.";

pub const FOOTER_COPYRIGHT: &str = "\u{a9} 2025 Advent Terra";
pub const FOOTER_PRIVACY: &str = "Privacy & Confidentiality Assured";
pub const FOOTER_SOCIAL: &str = "linkedin.com/company/advent-terra";
