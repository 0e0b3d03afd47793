//! Hard-coded display content for the site.

/// Label and in-page anchor for each navigation entry.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Services", "#services"),
    ("Work", "#work"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

/// (glyph, title, blurb) for the services grid.
pub const SERVICES: &[(&str, &str, &str)] = &[
    (
        "◉",
        "Bold Branding",
        "High-contrast logos and identities that scream authenticity. Built for startups ready to disrupt.",
    ),
    (
        "▣",
        "Web Design",
        "Immersive layouts with glitch effects and bold typography. Optimized for conversion and scalability.",
    ),
    (
        "⚡",
        "Motion Graphics",
        "Explosive animations that bring your vision to life. Looping hero videos and interactive elements.",
    ),
];

/// (title, blurb, tag) for the portfolio grid.
pub const PROJECTS: &[(&str, &str, &str)] = &[
    ("TechForge", "150% traffic surge with brutal contrasts.", "Branding"),
    ("EcomRush", "40% conversion uplift via glitch UI.", "Commerce"),
    ("InnoWave", "300% download spike with raw motion.", "App"),
    ("ViralVault", "Boosted retention by 60%.", "Fintech"),
    ("PulseGear", "200% sales growth in launch month.", "Web"),
];

pub const ABOUT_POINTS: &[&str] = &[
    "Raw neobrutalist aesthetics",
    "Immersive animations (3x engagement)",
    "Tailored strategies for rebels",
    "Directness: No fluff, just results",
];

pub const SOCIALS: &[&str] = &["Instagram", "Twitter", "LinkedIn", "Dribbble"];

pub const MARQUEE_TOP: &str = "BOLD • RAW • UNFILTERED • DISRUPT • DOMINATE";
pub const MARQUEE_BOTTOM: &str = "GLITCH • MOTION • CHAOS • IMPACT • SPEED";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_page_anchors() {
        assert!(!NAV_LINKS.is_empty());
        for (label, anchor) in NAV_LINKS {
            assert!(!label.is_empty());
            assert!(anchor.starts_with('#'), "{} is not an anchor", anchor);
            assert_eq!(*anchor, anchor.to_lowercase());
        }
    }

    #[test]
    fn content_tables_populated() {
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(PROJECTS.len(), 5);
        assert_eq!(ABOUT_POINTS.len(), 4);
    }
}
