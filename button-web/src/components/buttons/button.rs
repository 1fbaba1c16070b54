use leptos::*;

use super::config::ButtonConfig;
use super::resolver::{icon_classes, resolve, spinner_class, CONTROLLER};
use crate::components::icons::embedded_svg;
use crate::components::slidein::SlideinRegistry;

/// Renders the configured widget as a `<button>` or a button-styled `<a>`
/// and attaches the click behavior (icon/spinner swap, slide-in trigger).
#[component]
pub fn Button(config: ButtonConfig, children: Children) -> impl IntoView {
    let rendered = resolve(&config);

    let icon_ref: NodeRef<svg::Svg> = create_node_ref();
    let spinner_ref: NodeRef<svg::Svg> = create_node_ref();

    let has_spinner = config.spinner.is_some();
    let slider_target = config
        .slider
        .as_ref()
        .map(|slider| format!("{}_slider", slider.slider));
    let slider_source =
        config.slider.as_ref().and_then(|slider| slider.source.clone());
    let registry = use_context::<SlideinRegistry>();

    let on_click = move |_| {
        if has_spinner {
            swap_icon_for_spinner(icon_ref, spinner_ref);
        }
        if let Some(target) = &slider_target {
            open_slider(registry.as_ref(), target, slider_source.as_deref());
        }
    };

    let icon = icon_group(&config, icon_ref, spinner_ref);

    if rendered.is_button {
        let mut el = html::button()
            .attr("class", rendered.class_attr())
            .on(ev::click, on_click);
        for (key, value) in &rendered.data {
            el = el.attr(format!("data-{}", key), value.clone());
        }
        for (key, value) in &rendered.attrs {
            el = el.attr(key.clone(), value.clone());
        }
        el.child(icon).child(children()).into_view()
    } else {
        let mut el = html::a()
            .attr("href", rendered.url.clone().unwrap_or_default())
            .attr("class", rendered.class_attr())
            .on(ev::click, on_click);
        for (key, value) in &rendered.data {
            el = el.attr(format!("data-{}", key), value.clone());
        }
        for (key, value) in &rendered.attrs {
            el = el.attr(key.clone(), value.clone());
        }
        el.child(icon).child(children()).into_view()
    }
}

/// Spinner first, icon second, both tagged so the click behavior can find
/// them without a selector query.
fn icon_group(
    config: &ButtonConfig,
    icon_ref: NodeRef<svg::Svg>,
    spinner_ref: NodeRef<svg::Svg>,
) -> HtmlElement<html::Span> {
    let mut group = html::span();
    if let Some(spinner) = &config.spinner {
        group = group.child(
            embedded_svg(
                &spinner.image,
                &format!(
                    "{} {}",
                    spinner_class(config, spinner),
                    spinner.color
                ),
            )
            .node_ref(spinner_ref)
            .attr(format!("data-{}-target", CONTROLLER), "spinner"),
        );
    }
    if let Some(name) = &config.icon.name {
        group = group.child(
            embedded_svg(name, &icon_classes(config).join(" "))
                .node_ref(icon_ref)
                .attr(format!("data-{}-target", CONTROLLER), "icon"),
        );
    }
    group
}

fn swap_icon_for_spinner(
    icon_ref: NodeRef<svg::Svg>,
    spinner_ref: NodeRef<svg::Svg>,
) {
    if let Some(icon) = icon_ref.get() {
        if let Err(e) = icon.class_list().add_1("hidden") {
            log::error!("failed to hide icon: {:?}", e);
        }
    }
    if let Some(spinner) = spinner_ref.get() {
        if let Err(e) = spinner.class_list().replace("hidden", "block") {
            log::error!("failed to reveal spinner: {:?}", e);
        }
    }
}

fn open_slider(
    registry: Option<&SlideinRegistry>,
    target: &str,
    source: Option<&str>,
) {
    let registry = match registry {
        Some(registry) => registry,
        None => {
            log::error!("no slide-in registry provided in scope");
            return;
        }
    };
    match registry.lookup(target) {
        Some(panel) => panel.open(source),
        None => log::error!("no slide-in panel registered for {}", target),
    }
}
