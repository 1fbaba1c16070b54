use super::button_type::{ButtonColor, ButtonRole, ButtonSize, ButtonVariant};
use super::error::ButtonError;

pub const DEFAULT_TRANSITION: &str = "transition duration-300 ease-in-out";

/// Embedded icon spec. A bare string shorthand sets only the name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Icon {
    pub name: Option<String>,
    pub size: Option<ButtonSize>,
    pub color: Option<String>,
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Link spec. `as_button = true` forces native-button semantics even when a
/// url is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub url: String,
    pub options: Vec<(String, String)>,
    pub as_button: bool,
}

impl From<&str> for Link {
    fn from(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }
}

/// Loading spinner spec. `class = None` resolves to
/// `animate-spin <icon-size classes> hidden` for the widget's icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct Spinner {
    pub class: Option<String>,
    pub image: String,
    pub color: String,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            class: None,
            image: "full-spin".to_string(),
            color: "text-blue-500".to_string(),
        }
    }
}

/// Keyboard hotkey binding: raw key spec plus the popup label text.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotkey {
    pub keys: String,
    pub text: String,
}

impl Hotkey {
    pub fn new(keys: &str, text: &str) -> Self {
        Self {
            keys: keys.to_string(),
            text: text.to_string(),
        }
    }
}

/// Slide-in panel trigger. A bare string shorthand sets only the panel id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slider {
    pub slider: String,
    pub source: Option<String>,
}

impl From<&str> for Slider {
    fn from(slider: &str) -> Self {
        Self {
            slider: slider.to_string(),
            source: None,
        }
    }
}

/// Caller-supplied raw attributes, split at the normalization boundary into
/// the class word list, the data mapping and everything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlOptions {
    /// Space-separated class names appended after the computed classes.
    pub class: String,
    /// `data-*` entries; `controller` and `action` hold space-separated
    /// word lists that are merged with the computed ones.
    pub data: Vec<(String, String)>,
    /// Remaining attributes, passed through untouched.
    pub attrs: Vec<(String, String)>,
}

impl HtmlOptions {
    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Fully-typed button configuration, constructed fresh per render.
///
/// Token validation happens here at the boundary: the enum fields cannot
/// hold an unrecognized size or type, so `resolve` is total.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub icon: Icon,
    pub color: ButtonColor,
    pub link: Option<Link>,
    pub html_options: HtmlOptions,
    pub role: ButtonRole,
    pub transition: String,
    pub spinner: Option<Spinner>,
    pub hotkey: Option<Hotkey>,
    pub slider: Option<Slider>,
}

impl ButtonConfig {
    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            size: ButtonSize::default(),
            icon: Icon::default(),
            color: ButtonColor::Default,
            link: None,
            html_options: HtmlOptions::default(),
            role: ButtonRole::default(),
            transition: DEFAULT_TRANSITION.to_string(),
            spinner: None,
            hotkey: None,
            slider: None,
        }
    }

    /// Construct from raw string tokens, e.g. when the configuration comes
    /// from a template or config file rather than code.
    pub fn from_tokens(variant: &str, size: &str) -> Result<Self, ButtonError> {
        Ok(Self::new(variant.parse()?).with_size(size.parse()?))
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<ButtonColor>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<Link>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_html_options(mut self, html_options: HtmlOptions) -> Self {
        self.html_options = html_options;
        self
    }

    pub fn with_role(mut self, role: ButtonRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_transition(mut self, transition: &str) -> Self {
        self.transition = transition.to_string();
        self
    }

    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = Some(spinner);
        self
    }

    pub fn with_hotkey(mut self, hotkey: Hotkey) -> Self {
        self.hotkey = Some(hotkey);
        self
    }

    pub fn with_slider(mut self, slider: impl Into<Slider>) -> Self {
        self.slider = Some(slider.into());
        self
    }

    /// Button unless a link is present with `as_button == false`.
    /// Decided once, at resolution.
    pub fn is_button(&self) -> bool {
        self.link.as_ref().map_or(true, |link| link.as_button)
    }

    /// Icon size falls back to the widget size when not set explicitly.
    pub fn icon_size(&self) -> ButtonSize {
        self.icon.size.unwrap_or(self.size)
    }

    /// Resolved palette name: explicit color, else derived from the variant.
    pub fn palette(&self) -> String {
        match &self.color {
            ButtonColor::Named(palette) => palette.clone(),
            ButtonColor::Default => {
                self.variant.default_palette().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_shorthand_sets_only_the_name() {
        let icon = Icon::from("check");
        assert_eq!(icon.name.as_deref(), Some("check"));
        assert_eq!(icon.size, None);
        assert_eq!(icon.color, None);
    }

    #[test]
    fn link_shorthand_is_a_plain_anchor() {
        let link = Link::from("https://x");
        assert_eq!(link.url, "https://x");
        assert!(link.options.is_empty());
        assert!(!link.as_button);
    }

    #[test]
    fn slider_shorthand_has_no_source() {
        let slider = Slider::from("help");
        assert_eq!(slider.slider, "help");
        assert_eq!(slider.source, None);
    }

    #[test]
    fn spinner_defaults() {
        let spinner = Spinner::default();
        assert_eq!(spinner.class, None);
        assert_eq!(spinner.image, "full-spin");
        assert_eq!(spinner.color, "text-blue-500");
    }

    #[test]
    fn is_button_truth_table() {
        let config = ButtonConfig::new(ButtonVariant::Primary);
        assert!(config.is_button());

        let config = ButtonConfig::new(ButtonVariant::Primary)
            .with_link("https://x");
        assert!(!config.is_button());

        let config = ButtonConfig::new(ButtonVariant::Primary).with_link(Link {
            url: "https://x".to_string(),
            options: Vec::new(),
            as_button: true,
        });
        assert!(config.is_button());
    }

    #[test]
    fn icon_size_falls_back_to_widget_size() {
        let config = ButtonConfig::new(ButtonVariant::Primary)
            .with_size(ButtonSize::Xl)
            .with_icon("check");
        assert_eq!(config.icon_size(), ButtonSize::Xl);

        let config = config.with_icon(Icon {
            name: Some("check".to_string()),
            size: Some(ButtonSize::Xs),
            color: None,
        });
        assert_eq!(config.icon_size(), ButtonSize::Xs);
    }

    #[test]
    fn explicit_color_overrides_variant_palette() {
        let config =
            ButtonConfig::new(ButtonVariant::Primary).with_color("indigo");
        assert_eq!(config.palette(), "indigo");

        let config = ButtonConfig::new(ButtonVariant::Primary)
            .with_color("default");
        assert_eq!(config.palette(), "green");
    }

    #[test]
    fn from_tokens_rejects_bad_input() {
        assert!(ButtonConfig::from_tokens("primary", "sm").is_ok());
        assert_eq!(
            ButtonConfig::from_tokens("primary", "huge").unwrap_err(),
            ButtonError::InvalidSize("huge".to_string())
        );
        assert_eq!(
            ButtonConfig::from_tokens("danger", "sm").unwrap_err(),
            ButtonError::InvalidType("danger".to_string())
        );
    }
}
