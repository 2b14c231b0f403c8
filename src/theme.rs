pub const DARK_CLASS: &str = "dark";

const LIGHT_BLOBS: [&str; 3] = ["#60a5fa40", "#c084fc40", "#2dd4bf40"];
const DARK_BLOBS: [&str; 3] = ["#1e40af40", "#5b21b640", "#0f766e40"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        self.is_dark()
    }

    /// Shows where the toggle leads: a moon while light, a sun while dark.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn blob_colors(self) -> [&'static str; 3] {
        match self {
            Self::Light => LIGHT_BLOBS,
            Self::Dark => DARK_BLOBS,
        }
    }

    /// Blob colour for the `index`-th shape, wrapping past the palette.
    pub fn blob_color(self, index: usize) -> &'static str {
        let palette = self.blob_colors();
        palette[index % palette.len()]
    }

    pub fn cursor_color(self) -> &'static str {
        match self {
            Self::Light => "#F4A261",
            Self::Dark => "#E63946",
        }
    }

    /// Class carried by the document root while this theme is active.
    pub fn root_class(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn light_is_the_reload_default() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::default().root_class(), None);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }

    #[test]
    fn palettes_differ_per_mode() {
        assert_eq!(Theme::Light.blob_color(1), "#c084fc40");
        assert_eq!(Theme::Dark.blob_color(1), "#5b21b640");
        assert_eq!(Theme::Dark.blob_color(4), Theme::Dark.blob_color(1));
        assert_ne!(Theme::Light.cursor_color(), Theme::Dark.cursor_color());
    }

    proptest! {
        #[test]
        fn toggling_parity_decides_the_root_marker(start_dark in any::<bool>(), toggles in 0usize..64) {
            let start = if start_dark { Theme::Dark } else { Theme::Light };
            let end = (0..toggles).fold(start, |theme, _| theme.toggled());

            if toggles % 2 == 0 {
                prop_assert_eq!(end.root_class(), start.root_class());
            } else {
                prop_assert_eq!(end.is_dark(), !start.is_dark());
            }
        }
    }
}
