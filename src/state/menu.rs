/// Open/closed state of the mobile navigation panel. Owned by the header
/// component; everything the view needs (panel class, burger icon glyph) is
/// derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Forces the menu closed, e.g. when a nav link is followed.
    pub fn close(self) -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Glyph shown on the burger button.
    pub fn icon(&self) -> &'static str {
        if self.open {
            "x"
        } else {
            "menu"
        }
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open {
            "mobile-menu open"
        } else {
            "mobile-menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), "menu");
    }

    #[test]
    fn toggle_is_involutive() {
        let menu = MenuState::default();
        let twice = menu.toggle().toggle();
        assert_eq!(menu, twice);
        assert_eq!(menu.icon(), twice.icon());
    }

    #[test]
    fn toggle_swaps_icon() {
        assert_eq!(MenuState::default().toggle().icon(), "x");
    }

    #[test]
    fn close_wins_from_any_state() {
        assert!(!MenuState::default().toggle().close().is_open());
        assert!(!MenuState::default().close().is_open());
    }
}
