//! Responsive navigation menu state

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
    pub active_link: Option<usize>,
}

impl NavState {
    /// Hamburger click. Returns the new `aria-expanded` value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link was followed: close the menu and mark only that link active
    pub fn select(&mut self, index: usize) {
        self.open = false;
        self.active_link = Some(index);
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_link == Some(index)
    }
}

/// Keys that activate the focused hamburger like a click
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_select() {
        let mut nav = NavState::default();
        assert!(nav.toggle());
        nav.select(2);
        assert!(!nav.open);
        assert!(nav.is_active(2));
        assert!(!nav.is_active(0));
        nav.select(0);
        assert!(!nav.is_active(2));
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
    }
}
