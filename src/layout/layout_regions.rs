//! Layout regions tracking for UI components

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    // Base layout
    ResultsPane,
    InputField,
    SearchButton,

    // Popups
    Suggestions,
    HelpPopup,
    WelcomePopup,
}

/// Tracks rendered areas of UI components
///
/// Rebuilt on each render pass. A region is `None` while its component is hidden.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub results_pane: Option<Rect>,
    pub input_field: Option<Rect>,
    pub search_button: Option<Rect>,

    pub suggestions: Option<Rect>,
    pub help_popup: Option<Rect>,
    pub welcome_popup: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
