use ratatui::style::Color;

/// Colours the views draw with. `text` is the foreground on the selected day
/// and in the status bar; `heading` styles weekday labels and help sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub heading: Color,
    pub text: Color,
    pub selected_bg: Color,
    pub today: Color,
    pub event_marker: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    /// Named ANSI colours, so the terminal's own palette decides the look.
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            heading: Color::Yellow,
            text: Color::White,
            selected_bg: Color::Blue,
            today: Color::Green,
            event_marker: Color::LightRed,
            muted: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Dark ink for light terminal backgrounds.
    pub fn paper() -> Self {
        Self {
            name: "paper".to_string(),
            title: Color::Indexed(24),
            heading: Color::Indexed(94),
            text: Color::Indexed(235),
            selected_bg: Color::Indexed(153),
            today: Color::Indexed(28),
            event_marker: Color::Indexed(160),
            muted: Color::Indexed(245),
            error: Color::Indexed(124),
            success: Color::Indexed(28),
        }
    }

    /// Greys only; today and events are told apart by weight and the dot.
    pub fn mono() -> Self {
        Self {
            name: "mono".to_string(),
            title: Color::Indexed(255),
            heading: Color::Indexed(250),
            text: Color::Indexed(255),
            selected_bg: Color::Indexed(240),
            today: Color::Indexed(255),
            event_marker: Color::Indexed(250),
            muted: Color::Indexed(243),
            error: Color::Indexed(255),
            success: Color::Indexed(250),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "paper" => Self::paper(),
            "mono" => Self::mono(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "paper", "mono"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
