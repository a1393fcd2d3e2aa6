#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Inline style values painted onto the header element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
    pub box_shadow: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderVisualState {
    pub elevated: bool,
    pub color_scheme: ColorScheme,
}

impl HeaderVisualState {
    pub fn from_scroll(offset: f64, threshold: f64, color_scheme: ColorScheme) -> Self {
        Self {
            elevated: offset > threshold,
            color_scheme,
        }
    }

    pub fn with_color_scheme(self, color_scheme: ColorScheme) -> Self {
        Self { color_scheme, ..self }
    }

    pub fn style(&self) -> HeaderStyle {
        let background = match (self.color_scheme, self.elevated) {
            (ColorScheme::Light, false) => "rgba(255, 255, 255, 0.95)",
            (ColorScheme::Light, true) => "rgba(255, 255, 255, 0.98)",
            (ColorScheme::Dark, false) => "rgba(31, 33, 33, 0.95)",
            (ColorScheme::Dark, true) => "rgba(31, 33, 33, 0.98)",
        };

        if self.elevated {
            HeaderStyle {
                background,
                backdrop_filter: "blur(20px)",
                box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
            }
        } else {
            HeaderStyle {
                background,
                backdrop_filter: "blur(10px)",
                box_shadow: "none",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_starts_strictly_above_threshold() {
        let at = HeaderVisualState::from_scroll(100.0, 100.0, ColorScheme::Light);
        let above = HeaderVisualState::from_scroll(101.0, 100.0, ColorScheme::Light);
        assert!(!at.elevated);
        assert!(above.elevated);
        assert!(!HeaderVisualState::from_scroll(0.0, 100.0, ColorScheme::Light).elevated);
        assert!(HeaderVisualState::from_scroll(100.5, 100.0, ColorScheme::Light).elevated);
    }

    #[test]
    fn elevated_header_gets_stronger_blur_and_shadow() {
        let resting = HeaderVisualState::from_scroll(10.0, 100.0, ColorScheme::Light).style();
        assert_eq!(resting.background, "rgba(255, 255, 255, 0.95)");
        assert_eq!(resting.backdrop_filter, "blur(10px)");
        assert_eq!(resting.box_shadow, "none");

        let elevated = HeaderVisualState::from_scroll(400.0, 100.0, ColorScheme::Light).style();
        assert_eq!(elevated.background, "rgba(255, 255, 255, 0.98)");
        assert_eq!(elevated.backdrop_filter, "blur(20px)");
        assert_eq!(elevated.box_shadow, "0 2px 20px rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn dark_scheme_swaps_background_only() {
        let light = HeaderVisualState::from_scroll(400.0, 100.0, ColorScheme::Light);
        let dark = light.with_color_scheme(ColorScheme::Dark);
        assert!(dark.elevated);
        assert_eq!(dark.style().background, "rgba(31, 33, 33, 0.98)");
        assert_eq!(dark.style().box_shadow, light.style().box_shadow);

        let resting_dark = HeaderVisualState::from_scroll(0.0, 100.0, ColorScheme::Dark);
        assert_eq!(resting_dark.style().background, "rgba(31, 33, 33, 0.95)");
    }
}
