//! Inline styles for the widget's elements
//!
//! Single source of truth for layout and colors, applied by any renderer
//! that builds the widget's element tree.

/// Overlay and control bar backdrop
pub const BACKDROP: &str = "rgba(0, 0, 0, 0.7)";
/// Start button fill
pub const START_BUTTON_FILL: &str = "rgba(255, 255, 255, 0.9)";
/// Video letterbox color
pub const VIDEO_BACKGROUND: &str = "#000000";
/// Fullscreen button fill
pub const FULLSCREEN_FILL: &str = "#4a4a4a";

/// Ordered CSS declarations for one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(&'static str, &'static str)>,
}

impl Style {
    fn of(declarations: &[(&'static str, &'static str)]) -> Self {
        Self {
            declarations: declarations.to_vec(),
        }
    }

    /// Render as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full-viewport positioning container
    pub fn container() -> Self {
        Self::of(&[("position", "relative"), ("width", "100vw"), ("height", "100vh")])
    }

    /// Dimmed start gate overlay
    pub fn start_overlay() -> Self {
        Self::of(&[
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("right", "0"),
            ("bottom", "0"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
            ("z-index", "10"),
            ("background-color", BACKDROP),
        ])
    }

    pub fn start_button() -> Self {
        Self::of(&[
            ("background-color", START_BUTTON_FILL),
            ("color", "#000"),
            ("border", "none"),
            ("padding", "20px 40px"),
            ("font-size", "24px"),
            ("cursor", "pointer"),
            ("border-radius", "50px"),
        ])
    }

    /// Letterboxed video surface, clickable
    pub fn video() -> Self {
        Self::of(&[
            ("width", "100%"),
            ("height", "100%"),
            ("object-fit", "contain"),
            ("background-color", VIDEO_BACKGROUND),
            ("cursor", "pointer"),
        ])
    }

    /// Control bar pinned to the bottom edge
    pub fn control_bar() -> Self {
        Self::of(&[
            ("position", "absolute"),
            ("bottom", "0"),
            ("left", "0"),
            ("right", "0"),
            ("background-color", BACKDROP),
            ("padding", "15px"),
            ("display", "flex"),
            ("align-items", "center"),
            ("gap", "15px"),
        ])
    }

    pub fn play_button() -> Self {
        Self::of(&[
            ("background-color", "#fff"),
            ("border", "none"),
            ("width", "40px"),
            ("height", "40px"),
            ("border-radius", "50%"),
            ("cursor", "pointer"),
        ])
    }

    pub fn seek_range() -> Self {
        Self::of(&[("flex", "1")])
    }

    pub fn time_label() -> Self {
        Self::of(&[("color", "#fff"), ("min-width", "60px")])
    }

    pub fn volume_group() -> Self {
        Self::of(&[("display", "flex"), ("align-items", "center"), ("gap", "5px")])
    }

    pub fn volume_icon() -> Self {
        Self::of(&[("color", "#fff")])
    }

    pub fn fullscreen_button() -> Self {
        Self::of(&[
            ("background-color", FULLSCREEN_FILL),
            ("color", "#fff"),
            ("border", "none"),
            ("padding", "8px 12px"),
            ("cursor", "pointer"),
            ("border-radius", "4px"),
        ])
    }
}
