pub(crate) mod components;
pub(crate) mod helpers;

pub mod app;

pub use components::buttons::{
    resolve, Button, ButtonColor, ButtonConfig, ButtonError, ButtonRole,
    ButtonSize, ButtonVariant, Hotkey, HtmlOptions, Icon, Link,
    RenderAttributes, Slider, Spinner, DEFAULT_TRANSITION,
};
pub use components::slidein::{SlideinPanel, SlideinRegistry, SlideinView};
