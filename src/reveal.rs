/// Options for the scroll-reveal observer.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element (0..=1) that must be visible. Defaults to 0.1.
    pub threshold: f64,
    /// CSS margin around the viewport. Defaults to `"0px"`.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
        }
    }
}

impl RevealOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    /// The threshold clamped into `0..=1`; NaN falls back to the default.
    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            Self::default().threshold
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }
}

/// One-shot visibility latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report.
    ///
    /// Returns `true` exactly once, on the report that flips the latch; the
    /// observer should stop watching at that point.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_shot() {
        let mut reveal = Reveal::default();
        assert!(!reveal.is_visible());
        assert!(!reveal.observe(false));
        assert!(!reveal.is_visible());

        assert!(reveal.observe(true));
        assert!(reveal.is_visible());

        assert!(!reveal.observe(false));
        assert!(reveal.is_visible());
        assert!(!reveal.observe(true));
    }

    #[test]
    fn test_options_defaults_and_clamp() {
        let options = RevealOptions::default();
        assert_eq!(options.clamped_threshold(), 0.1);
        assert_eq!(options.root_margin, "0px");

        assert_eq!(RevealOptions::default().threshold(1.5).clamped_threshold(), 1.0);
        assert_eq!(RevealOptions::default().threshold(-0.2).clamped_threshold(), 0.0);
        assert_eq!(RevealOptions::default().threshold(f64::NAN).clamped_threshold(), 0.1);
        assert_eq!(
            RevealOptions::default().root_margin("0px 0px -10% 0px").root_margin,
            "0px 0px -10% 0px"
        );
    }
}
