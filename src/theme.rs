//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Pantry - warm herb greens and paprika accents on a dark slate background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors
    pub const TEXT: Color = Color::Rgb(238, 234, 224);
    pub const TEXT_DIM: Color = Color::Rgb(98, 102, 96);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 148, 136);

    // Background colors
    pub const BG_DARK: Color = Color::Rgb(28, 30, 28);
    pub const BG_SURFACE: Color = Color::Rgb(38, 41, 38);

    // Semantic colors
    pub const WARNING: Color = Color::Rgb(240, 196, 90);
    pub const ERROR: Color = Color::Rgb(222, 98, 78);

    // Accent colors
    pub const HERB: Color = Color::Rgb(134, 192, 108);
    pub const PAPRIKA: Color = Color::Rgb(232, 122, 74);
    pub const SAFFRON: Color = Color::Rgb(240, 196, 90);
    pub const SAGE: Color = Color::Rgb(160, 190, 170);

    // Shared cursor style for the search field
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Search field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::HERB;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::HERB;
    pub const TEXT: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;

    pub const BUTTON: Color = palette::PAPRIKA;
    pub const BUTTON_DISABLED: Color = palette::TEXT_DIM;
}

/// Suggestion popup styles
pub mod suggestions {
    use super::*;

    pub const BORDER: Color = palette::SAGE;
    pub const TITLE: Color = palette::SAGE;
    pub const BACKGROUND: Color = palette::BG_DARK;

    pub const ITEM_NORMAL_FG: Color = palette::TEXT;
    pub const ITEM_SELECTED_FG: Color = Color::Black;
    pub const ITEM_SELECTED_BG: Color = palette::HERB;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;

    // Characters of the name matching what was typed
    pub const MATCH_FG: Color = palette::SAFFRON;
}

/// Recipe results pane styles
pub mod results {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::HERB;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::HERB;
    pub const SEARCHING: Color = palette::SAFFRON;

    pub const EMPTY_MESSAGE: Color = palette::TEXT_MUTED;
    pub const ERROR_MESSAGE: Color = palette::ERROR;
    pub const IDLE_HINT: Color = palette::TEXT_DIM;

    pub const SCROLLBAR: Color = palette::TEXT_DIM;
}

/// Recipe card styles
pub mod card {
    use super::*;

    pub const TITLE: Color = palette::TEXT;
    pub const TITLE_MODIFIER: Modifier = Modifier::BOLD;
    pub const SELECTED_MARKER: Color = palette::PAPRIKA;
    pub const SELECTED_TITLE: Color = palette::PAPRIKA;

    pub const IMAGE: Color = palette::TEXT_DIM;
    pub const INGREDIENT_BULLET: Color = palette::HERB;
    pub const INGREDIENT: Color = palette::TEXT_MUTED;

    pub const BUTTON: Color = palette::SAFFRON;
    pub const BUTTON_LOADING: Color = palette::TEXT_DIM;

    pub const INSTRUCTIONS_HEADER: Color = palette::SAGE;
    pub const INSTRUCTIONS: Color = palette::TEXT;
}

/// Help popup styles
pub mod help {
    use super::*;

    pub const BORDER: Color = palette::HERB;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Color = palette::HERB;
    pub const SECTION_HEADER: Color = palette::SAGE;
    pub const KEY: Color = palette::SAFFRON;
    pub const DESCRIPTION: Color = palette::TEXT;
    pub const FOOTER: Color = palette::TEXT_DIM;
}

/// Bottom help line styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::HERB;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// First visit welcome popup styles
pub mod welcome {
    use super::*;

    pub const BORDER: Color = palette::PAPRIKA;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TITLE: Color = palette::PAPRIKA;
    pub const TEXT: Color = palette::TEXT;
    pub const KEY: Color = palette::SAFFRON;
    pub const FOOTER: Color = palette::TEXT_DIM;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Black,
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: palette::PAPRIKA,
    };
}
