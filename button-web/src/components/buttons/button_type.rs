use std::str::FromStr;

use super::error::ButtonError;

/// Color/type variant of the button. Selects the palette default and the
/// icon tint templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Tertiary,
}

impl ButtonVariant {
    pub fn default_palette(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "green",
            ButtonVariant::Secondary => "blue",
            ButtonVariant::Tertiary => "gray",
        }
    }

    // keep every generated palette in the tailwind safelist,
    // else tailwind will not add these classes to css
    pub fn color_classes(&self, palette: &str) -> Vec<String> {
        match self {
            ButtonVariant::Primary => vec![
                format!("dark:bg-{}-500", palette),
                format!("dark:border-{}-200", palette),
                format!("dark:hover:bg-{}-200", palette),
                format!("dark:hover:text-{}-700", palette),
                "border-transparent".to_string(),
                "text-white".to_string(),
                format!("bg-{}-600", palette),
                format!("hover:bg-{}-700", palette),
                format!("focus:ring-{}-500", palette),
            ],
            ButtonVariant::Secondary => vec![
                format!("dark:bg-{}-700", palette),
                "border-transparent".to_string(),
                format!("text-{}-700", palette),
                format!("bg-{}-100", palette),
                format!("hover:bg-{}-200", palette),
                format!("focus:ring-{}-500", palette),
            ],
            ButtonVariant::Tertiary => vec![
                format!("dark:bg-{}-800", palette),
                format!("dark:border-{}-400", palette),
                format!("border-{}-300", palette),
                format!("dark:text-{}-300", palette),
                format!("text-{}-700", palette),
                "bg-white".to_string(),
                format!("dark:hover:bg-{}-500", palette),
                format!("hover:bg-{}-50", palette),
                format!("focus:ring-{}-500", palette),
            ],
        }
    }

    pub fn icon_color_classes(&self, palette: &str) -> Vec<String> {
        match self {
            ButtonVariant::Primary => vec![
                "text-white".to_string(),
                format!("dark:text-{}-200", palette),
                format!("dark:hover:text-{}-800", palette),
                "fill-current".to_string(),
            ],
            ButtonVariant::Secondary | ButtonVariant::Tertiary => vec![
                format!("text-{}-500", palette),
                format!("dark:text-{}-400", palette),
                "fill-current".to_string(),
            ],
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ButtonVariant::Primary),
            "secondary" => Ok(ButtonVariant::Secondary),
            "tertiary" => Ok(ButtonVariant::Tertiary),
            _ => Err(ButtonError::InvalidType(s.to_string())),
        }
    }
}

/// Size token shared by the button body, the icon and the spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Xs,
    Sm,
    #[default]
    Normal,
    Lg,
    Xl,
}

impl ButtonSize {
    /// Padding and typography classes for the button body.
    pub fn button_classes(&self) -> &'static [&'static str] {
        match self {
            ButtonSize::Xs => {
                &["text-xs", "font-medium", "px-2", "py-1", "rounded"]
            }
            ButtonSize::Sm => &[
                "text-sm",
                "leading-4",
                "font-medium",
                "px-3",
                "py-2",
                "rounded-md",
            ],
            ButtonSize::Normal => {
                &["text-sm", "font-medium", "px-4", "py-2", "rounded-md"]
            }
            ButtonSize::Lg => {
                &["text-base", "font-medium", "px-4", "py-2", "rounded-md"]
            }
            ButtonSize::Xl => {
                &["text-base", "font-medium", "px-6", "py-3", "rounded-md"]
            }
        }
    }

    /// Margin and box classes for the embedded icon. The spinner reuses
    /// these so icon and spinner always render at the same size.
    pub fn icon_classes(&self) -> &'static [&'static str] {
        match self {
            ButtonSize::Xs => &["-ml-0.5", "mr-2", "h-3", "w-3"],
            ButtonSize::Sm => &["-ml-1", "mr-2", "h-4", "w-4"],
            ButtonSize::Normal => &["-ml-1", "mr-3", "h-4", "w-4"],
            ButtonSize::Lg | ButtonSize::Xl => {
                &["-ml-1", "mr-3", "h-5", "w-5"]
            }
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xs" => Ok(ButtonSize::Xs),
            "sm" => Ok(ButtonSize::Sm),
            "normal" => Ok(ButtonSize::Normal),
            "lg" => Ok(ButtonSize::Lg),
            "xl" => Ok(ButtonSize::Xl),
            _ => Err(ButtonError::InvalidSize(s.to_string())),
        }
    }
}

/// Palette override. `Default` derives the palette from the variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ButtonColor {
    #[default]
    Default,
    Named(String),
}

impl From<&str> for ButtonColor {
    fn from(s: &str) -> Self {
        match s {
            "default" => ButtonColor::Default,
            _ => ButtonColor::Named(s.to_string()),
        }
    }
}

/// Native `type` attribute used when the widget renders as a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonRole {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonRole::Button => "button",
            ButtonRole::Submit => "submit",
            ButtonRole::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_tokens_parse() {
        for (token, size) in [
            ("xs", ButtonSize::Xs),
            ("sm", ButtonSize::Sm),
            ("normal", ButtonSize::Normal),
            ("lg", ButtonSize::Lg),
            ("xl", ButtonSize::Xl),
        ] {
            assert_eq!(token.parse::<ButtonSize>(), Ok(size));
        }
    }

    #[test]
    fn unknown_size_token_fails() {
        assert_eq!(
            "teeny".parse::<ButtonSize>(),
            Err(ButtonError::InvalidSize("teeny".to_string()))
        );
    }

    #[test]
    fn unknown_type_token_fails() {
        assert_eq!(
            "quaternary".parse::<ButtonVariant>(),
            Err(ButtonError::InvalidType("quaternary".to_string()))
        );
    }

    #[test]
    fn palette_defaults_per_variant() {
        assert_eq!(ButtonVariant::Primary.default_palette(), "green");
        assert_eq!(ButtonVariant::Secondary.default_palette(), "blue");
        assert_eq!(ButtonVariant::Tertiary.default_palette(), "gray");
    }

    #[test]
    fn button_classes_match_size_table() {
        assert_eq!(
            ButtonSize::Xs.button_classes(),
            ["text-xs", "font-medium", "px-2", "py-1", "rounded"]
        );
        assert_eq!(
            ButtonSize::Sm.button_classes(),
            [
                "text-sm",
                "leading-4",
                "font-medium",
                "px-3",
                "py-2",
                "rounded-md"
            ]
        );
        assert_eq!(
            ButtonSize::Normal.button_classes(),
            ["text-sm", "font-medium", "px-4", "py-2", "rounded-md"]
        );
        assert_eq!(
            ButtonSize::Lg.button_classes(),
            ["text-base", "font-medium", "px-4", "py-2", "rounded-md"]
        );
        assert_eq!(
            ButtonSize::Xl.button_classes(),
            ["text-base", "font-medium", "px-6", "py-3", "rounded-md"]
        );
    }

    #[test]
    fn icon_classes_match_size_table() {
        assert_eq!(
            ButtonSize::Xs.icon_classes(),
            ["-ml-0.5", "mr-2", "h-3", "w-3"]
        );
        assert_eq!(
            ButtonSize::Sm.icon_classes(),
            ["-ml-1", "mr-2", "h-4", "w-4"]
        );
        assert_eq!(
            ButtonSize::Normal.icon_classes(),
            ["-ml-1", "mr-3", "h-4", "w-4"]
        );
        // lg and xl share one entry
        assert_eq!(
            ButtonSize::Lg.icon_classes(),
            ["-ml-1", "mr-3", "h-5", "w-5"]
        );
        assert_eq!(ButtonSize::Xl.icon_classes(), ButtonSize::Lg.icon_classes());
    }

    #[test]
    fn primary_color_classes_use_palette() {
        let classes = ButtonVariant::Primary.color_classes("green");
        assert!(classes.contains(&"bg-green-600".to_string()));
        assert!(classes.contains(&"hover:bg-green-700".to_string()));
        assert!(classes.contains(&"focus:ring-green-500".to_string()));
        assert!(classes.contains(&"border-transparent".to_string()));
    }

    #[test]
    fn tertiary_is_outlined() {
        let classes = ButtonVariant::Tertiary.color_classes("gray");
        assert!(classes.contains(&"border-gray-300".to_string()));
        assert!(classes.contains(&"bg-white".to_string()));
        assert!(classes.contains(&"hover:bg-gray-50".to_string()));
    }
}
