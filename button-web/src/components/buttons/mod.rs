mod button;
mod button_type;
mod config;
mod error;
mod resolver;

pub use button::Button;
pub use button_type::{ButtonColor, ButtonRole, ButtonSize, ButtonVariant};
pub use config::{
    ButtonConfig, Hotkey, HtmlOptions, Icon, Link, Slider, Spinner,
    DEFAULT_TRANSITION,
};
pub use error::ButtonError;
pub use resolver::{resolve, RenderAttributes, CONTROLLER};
