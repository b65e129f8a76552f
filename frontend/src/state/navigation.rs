use crate::config;

/// Mobile menu and services submenu of the injected navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
    pub submenu_open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if !self.open {
            self.submenu_open = false;
        }
    }

    pub fn toggle_submenu(&mut self) {
        self.submenu_open = !self.submenu_open;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.submenu_open = false;
    }

    /// The "Services" link only expands its submenu on mobile widths.
    pub fn link_clicked(&mut self, link_text: &str, viewport_width: f64) {
        if viewport_width <= config::MOBILE_NAV_MAX && link_text.trim() == "Services" {
            return;
        }
        self.close();
    }

    pub fn resized(&mut self, viewport_width: f64) {
        if viewport_width > config::MOBILE_NAV_MAX {
            self.close();
        }
    }
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_NAV_PX
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// First section containing the scroll position plus the nav offset.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + config::ACTIVE_LINK_OFFSET_PX;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at the active section.
pub fn link_targets(href: &str, section_id: Option<&str>) -> bool {
    match (href.strip_prefix('#'), section_id) {
        (Some(target), Some(id)) => target == id,
        // A bare "#" link is active when no section is.
        (Some(target), None) => target.is_empty(),
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home".into(), top: 0.0, height: 800.0 },
            SectionBounds { id: "about".into(), top: 800.0, height: 600.0 },
            SectionBounds { id: "reviews".into(), top: 1400.0, height: 500.0 },
        ]
    }

    #[test]
    fn closing_menu_closes_submenu() {
        let mut menu = NavMenu::default();
        menu.toggle();
        menu.toggle_submenu();
        assert_eq!(menu, NavMenu { open: true, submenu_open: true });
        menu.toggle();
        assert_eq!(menu, NavMenu::default());
    }

    #[test]
    fn services_link_keeps_mobile_menu_open() {
        let mut menu = NavMenu { open: true, submenu_open: false };
        menu.link_clicked(" Services ", 600.0);
        assert!(menu.open);
        menu.link_clicked("Services", 1200.0);
        assert!(!menu.open);
        menu.toggle();
        menu.link_clicked("About", 600.0);
        assert!(!menu.open);
    }

    #[test]
    fn desktop_resize_closes_menu() {
        let mut menu = NavMenu { open: true, submenu_open: true };
        menu.resized(700.0);
        assert!(menu.open);
        menu.resized(769.0);
        assert_eq!(menu, NavMenu::default());
    }

    #[test]
    fn scrolled_threshold() {
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(51.0));
    }

    #[test]
    fn active_section_uses_offset() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 679.0), Some("home"));
        assert_eq!(active_section(&sections, 680.0), Some("about"));
        assert_eq!(active_section(&sections, 1780.0), None);
    }

    #[test]
    fn links_match_by_fragment() {
        assert!(link_targets("#about", Some("about")));
        assert!(!link_targets("#home", Some("about")));
        assert!(!link_targets("/contact", Some("about")));
        assert!(!link_targets("#home", None));
    }
}
