/// Vertical scroll position of a line-based viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height / 2);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height / 2);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Move the viewport the least amount needed to show lines `start..end`.
    ///
    /// When the range is taller than the viewport its first line wins.
    pub fn ensure_visible(&mut self, start: u32, end: u32) {
        let viewport = self.viewport_height as u32;
        if viewport == 0 {
            return;
        }
        let offset = self.offset as u32;
        let target = if start < offset || end.saturating_sub(start) > viewport {
            start
        } else if end > offset + viewport {
            end - viewport
        } else {
            offset
        };
        self.offset = target.min(self.max_offset as u32) as u16;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
