use chrono::{DateTime, Datelike, Utc};

/// Scroll offset after which the header gets its solid background.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
    Footer,
}

/// Render order once loading is done. The project modal is layered on top.
pub const SECTION_ORDER: [Section; 8] = [
    Section::Header,
    Section::Hero,
    Section::About,
    Section::Skills,
    Section::Experience,
    Section::Projects,
    Section::Contact,
    Section::Footer,
];

/// Navigation targets, in menu order.
pub const NAV_SECTIONS: [Section; 5] = [
    Section::About,
    Section::Skills,
    Section::Experience,
    Section::Projects,
    Section::Contact,
];

impl Section {
    /// Stable element id used as the in-page anchor.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Self::About => Some("about"),
            Self::Skills => Some("skills"),
            Self::Experience => Some("experience"),
            Self::Projects => Some("projects"),
            Self::Contact => Some("contact"),
            Self::Header | Self::Hero | Self::Footer => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
        }
    }

    pub fn href(self) -> String {
        match self.anchor() {
            Some(id) => format!("#{id}"),
            None => "#".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

/// Header presentation: scroll styling plus the mobile menu toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl HeaderState {
    pub fn on_scroll(&mut self, y: f64) {
        self.scrolled = y > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a nav link always closes the mobile menu.
    pub fn navigate(&mut self) {
        self.menu_open = false;
    }

    pub fn class(&self) -> &'static str {
        if self.scrolled {
            "bg-slate-950/95 backdrop-blur-md border-b border-cyan-400/20"
        } else {
            "bg-transparent"
        }
    }
}

/// Year shown in the footer notice: the year the site was built, or the
/// current year if the stamp can't be read.
pub fn copyright_year(build_time: &str) -> i32 {
    DateTime::parse_from_rfc3339(build_time)
        .map(|dt| dt.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_are_rendered_sections() {
        for section in NAV_SECTIONS {
            assert!(section.anchor().is_some());
            assert!(SECTION_ORDER.contains(&section));
        }
        let anchors = NAV_SECTIONS
            .iter()
            .filter_map(|s| s.anchor())
            .collect::<Vec<_>>();
        assert_eq!(
            anchors,
            vec!["about", "skills", "experience", "projects", "contact"]
        );
    }

    #[test]
    fn test_section_order() {
        let pos = |s: Section| SECTION_ORDER.iter().position(|x| *x == s).unwrap();
        assert_eq!(pos(Section::Header), 0);
        assert!(pos(Section::Hero) < pos(Section::About));
        assert!(pos(Section::Projects) < pos(Section::Contact));
        assert_eq!(pos(Section::Footer), SECTION_ORDER.len() - 1);
        assert_eq!(Section::Contact.href(), "#contact");
        assert_eq!(Section::Hero.href(), "#");
    }

    #[test]
    fn test_header_scroll_threshold() {
        let mut header = HeaderState::default();
        header.on_scroll(50.0);
        assert!(!header.scrolled);
        header.on_scroll(50.5);
        assert!(header.scrolled);
        assert!(header.class().contains("backdrop-blur"));
        header.on_scroll(0.0);
        assert_eq!(header.class(), "bg-transparent");
    }

    #[test]
    fn test_menu_closes_on_navigation() {
        let mut header = HeaderState::default();
        header.toggle_menu();
        assert!(header.menu_open);
        header.navigate();
        assert!(!header.menu_open);
        header.navigate();
        assert!(!header.menu_open);
    }

    #[test]
    fn test_copyright_year() {
        assert_eq!(copyright_year("2025-03-01T12:00:00+00:00"), 2025);
        assert_eq!(copyright_year("garbage"), Utc::now().year());
    }
}
