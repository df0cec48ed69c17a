/// One-shot visibility state for reveal-on-scroll animation. An element
/// starts hidden and stays shown after its first intersection, even if it
/// scrolls back out of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Shown,
}

impl Reveal {
    pub fn on_intersect(self, intersecting: bool) -> Self {
        match self {
            Reveal::Hidden if intersecting => Reveal::Shown,
            state => state,
        }
    }

    /// Inline style for the animated element; the transition itself is
    /// constant so the browser animates the property changes.
    pub fn style(&self) -> &'static str {
        match self {
            Reveal::Hidden => {
                "opacity: 0; transform: translateY(20px); \
                 transition: opacity 0.6s ease, transform 0.6s ease;"
            }
            Reveal::Shown => {
                "opacity: 1; transform: translateY(0); \
                 transition: opacity 0.6s ease, transform 0.6s ease;"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_intersection() {
        assert_eq!(Reveal::Hidden.on_intersect(true), Reveal::Shown);
    }

    #[test]
    fn stays_hidden_while_off_screen() {
        assert_eq!(Reveal::Hidden.on_intersect(false), Reveal::Hidden);
    }

    #[test]
    fn never_reverts_after_reveal() {
        // enter, exit, enter: the transition fires exactly once
        let state = Reveal::Hidden
            .on_intersect(true)
            .on_intersect(false)
            .on_intersect(true);
        assert_eq!(state, Reveal::Shown);
        assert_eq!(Reveal::Shown.on_intersect(false), Reveal::Shown);
    }
}
