/// Visibility of the welcome popup
///
/// Shown once when the visit tracker reports a first visit and dismissed by
/// the first key press or click.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeState {
    visible: bool,
}

impl WelcomeState {
    pub fn new(first_visit: bool) -> Self {
        Self {
            visible: first_visit,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
