use leptos::*;

use crate::components::buttons::{
    Button, ButtonConfig, ButtonSize, ButtonVariant, Hotkey, Slider, Spinner,
};
use crate::components::slidein::{SlideinRegistry, SlideinView};

#[component]
pub fn App() -> impl IntoView {
    provide_context(SlideinRegistry::new());

    let save = ButtonConfig::new(ButtonVariant::Primary)
        .with_icon("check")
        .with_spinner(Spinner::default())
        .with_hotkey(Hotkey::new("ctrl+s", "Save"));
    let docs = ButtonConfig::new(ButtonVariant::Secondary)
        .with_link("https://example.com/docs");
    let help = ButtonConfig::new(ButtonVariant::Tertiary)
        .with_size(ButtonSize::Sm)
        .with_slider(Slider {
            slider: "help".to_string(),
            source: Some("toolbar".to_string()),
        });

    view! {
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <div class="flex items-center gap-4 py-8">
                <Button config=save>"Save"</Button>
                <Button config=docs>"Documentation"</Button>
                <Button config=help>"Help"</Button>
            </div>
            <SlideinView panel_id="help_slider">
                <p class="text-sm">"Need a hand? Start here."</p>
            </SlideinView>
        </div>
    }
}
