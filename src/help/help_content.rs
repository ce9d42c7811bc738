pub struct HelpSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "GLOBAL",
        entries: &[
            ("F1", "Toggle this help"),
            ("Ctrl+S", "Search recipes for the current text"),
            ("Shift+Tab", "Switch focus (Search / Recipes)"),
            ("Ctrl+C", "Quit"),
        ],
    },
    HelpSection {
        title: "SEARCH FIELD",
        entries: &[
            ("Enter", "Search recipes"),
            ("←/→ Home/End", "Move the cursor"),
            ("Ctrl+J / Ctrl+K", "Delete to start / end of line"),
            ("Ctrl+W", "Delete the previous word"),
            ("Ctrl+U / Ctrl+R", "Undo / redo"),
        ],
    },
    HelpSection {
        title: "SUGGESTIONS",
        entries: &[
            ("↑/↓", "Highlight a suggestion"),
            ("Tab", "Search with the highlighted (or first) suggestion"),
            ("Enter", "Search with the highlighted suggestion"),
            ("Esc", "Close the suggestion list"),
            ("Click", "Search with the clicked suggestion"),
        ],
    },
    HelpSection {
        title: "RECIPES",
        entries: &[
            ("j/k ↑/↓", "Select next / previous recipe"),
            ("Enter/Space", "Show or hide instructions"),
            ("J/K", "Scroll one line"),
            ("Ctrl+D/U", "Scroll half a page"),
            ("g/G", "First / last recipe"),
            ("?", "Open this help"),
            ("Esc / i", "Back to the search field"),
            ("q", "Quit"),
        ],
    },
    HelpSection {
        title: "MOUSE",
        entries: &[
            ("Click [ Search ]", "Search recipes"),
            ("Click a button", "Show or hide instructions"),
            ("Wheel", "Scroll recipes"),
        ],
    },
];

pub const HELP_FOOTER: &str = "j/k: scroll | F1/Esc: close";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_entries() {
        for section in HELP_SECTIONS {
            assert!(!section.entries.is_empty(), "{} is empty", section.title);
        }
    }

    #[test]
    fn test_keys_fit_key_column() {
        for section in HELP_SECTIONS {
            for (key, _) in section.entries {
                assert!(key.chars().count() <= 18, "key too wide: {}", key);
            }
        }
    }
}
