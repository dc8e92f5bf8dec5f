use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";
pub const PAGE_QUERY_PARAM: &str = "page";
pub const TAGLINE_INTERVAL_MS: u64 = 5000;

/// Colour scheme of the whole site. Persisted as `"dark"` / `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class applied to the page wrapper; the stylesheet keys its palette off it.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Lab,
}

impl Page {
    /// Maps the value of the `page` query parameter to a view.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("lab") => Page::Lab,
            _ => Page::Home,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Lab => "/?page=lab",
        }
    }
}

/// Keyboard shortcuts the lab page listens for on the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabShortcut {
    GoHome,
    CloseTool,
}

impl LabShortcut {
    /// `ctrl_or_meta` is true when Ctrl (or Cmd on macOS) is held.
    pub fn from_key(key: &str, ctrl_or_meta: bool) -> Option<Self> {
        if ctrl_or_meta && key.eq_ignore_ascii_case("h") {
            Some(LabShortcut::GoHome)
        } else if key == "Escape" {
            Some(LabShortcut::CloseTool)
        } else {
            None
        }
    }
}

pub fn next_tagline(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Formats an RFC 3339 timestamp as e.g. `Mar 4, 2025` for the footer.
pub fn build_date_label(rfc3339: &str) -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .ok()
        .map(|dt| dt.format("%b %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_theme_toggle_survives_reload() {
        // nothing persisted yet
        let stored: Option<String> = None;
        let theme = stored
            .and_then(|s| serde_json::from_str::<Theme>(&s).ok())
            .unwrap_or_default();
        assert_eq!(theme, Theme::Dark);

        let toggled = theme.toggled();
        let stored = serde_json::to_string(&toggled).unwrap();
        assert_eq!(stored, "\"light\"");

        let reloaded: Theme = serde_json::from_str(&stored).unwrap();
        assert_eq!(reloaded, Theme::Light);
        assert_eq!(reloaded.toggled(), Theme::Dark);
    }

    #[test]
    fn test_corrupt_theme_falls_back() {
        let theme = serde_json::from_str::<Theme>("\"sepia\"").unwrap_or_default();
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_page_from_query() {
        assert_eq!(Page::from_query(None), Page::Home);
        assert_eq!(Page::from_query(Some("lab")), Page::Lab);
        assert_eq!(Page::from_query(Some("home")), Page::Home);
        assert_eq!(Page::from_query(Some("LAB")), Page::Home);
        assert_eq!(Page::from_query(Some("")), Page::Home);
    }

    #[test]
    fn test_page_href_matches_query() {
        for page in [Page::Home, Page::Lab] {
            let href = page.href();
            let value = href
                .split_once('?')
                .and_then(|(_, q)| q.strip_prefix(&format!("{PAGE_QUERY_PARAM}=")));
            assert_eq!(Page::from_query(value), page);
        }
    }

    #[test]
    fn test_tagline_wraps() {
        assert_eq!(next_tagline(0, 3), 1);
        assert_eq!(next_tagline(2, 3), 0);
        assert_eq!(next_tagline(0, 1), 0);
        assert_eq!(next_tagline(5, 0), 0);
    }

    #[test]
    fn test_build_date_label() {
        assert_eq!(
            build_date_label("2025-03-04T10:20:30+00:00").as_deref(),
            Some("Mar 4, 2025")
        );
        assert_eq!(build_date_label("yesterday"), None);
    }

    #[test]
    fn test_lab_shortcuts() {
        assert_eq!(LabShortcut::from_key("h", true), Some(LabShortcut::GoHome));
        assert_eq!(LabShortcut::from_key("H", true), Some(LabShortcut::GoHome));
        assert_eq!(LabShortcut::from_key("h", false), None);
        assert_eq!(LabShortcut::from_key("Escape", false), Some(LabShortcut::CloseTool));
        assert_eq!(LabShortcut::from_key("Escape", true), Some(LabShortcut::CloseTool));
        assert_eq!(LabShortcut::from_key("j", true), None);
    }
}
