use super::config::{ButtonConfig, Spinner};
use crate::helpers::hotkey_label;

/// Identifier the emitted `data-controller`/`data-action`/target attributes
/// are namespaced under, so the markup stays compatible with a
/// behavior-attachment runtime reading them.
pub const CONTROLLER: &str = "button--component";

const BASE_STYLE: &[&str] =
    &["inline-flex", "justify-center", "items-center", "border", "shadow-sm"];

/// Everything the render entry point needs: element kind, the final class
/// list, `data-*` entries, pass-through attributes and the link target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderAttributes {
    pub is_button: bool,
    pub classes: Vec<String>,
    pub data: Vec<(String, String)>,
    pub attrs: Vec<(String, String)>,
    pub url: Option<String>,
}

impl RenderAttributes {
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attr_value(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Derive the final markup attributes from a typed configuration.
///
/// Pure and total: token validation already happened when the config was
/// built, so every input resolves.
pub fn resolve(config: &ButtonConfig) -> RenderAttributes {
    let html_options = &config.html_options;

    let mut data: Vec<(String, String)> = html_options
        .data
        .iter()
        .filter(|(key, _)| key != "controller" && key != "action")
        .cloned()
        .collect();
    let mut controllers =
        split_words(html_options.data_value("controller").unwrap_or(""));
    let mut actions =
        split_words(html_options.data_value("action").unwrap_or(""));

    if let Some(hotkey) = &config.hotkey {
        data.push(("hotkey".to_string(), hotkey.keys.clone()));
        data.push((
            "popup-markup-value".to_string(),
            hotkey_label(&hotkey.text, &hotkey.keys),
        ));
        controllers.push("hotkey".to_string());
        controllers.push("popup".to_string());
    }

    if let Some(slider) = &config.slider {
        data.push((
            format!("{}-slider-value", CONTROLLER),
            format!("{}_slider", slider.slider),
        ));
        if let Some(source) = &slider.source {
            data.push((
                format!("{}-slider-source-value", CONTROLLER),
                source.clone(),
            ));
        }
        controllers.push(CONTROLLER.to_string());
        actions.push(format!("{}#openSlider", CONTROLLER));
    }

    if config.spinner.is_some() {
        controllers.push(CONTROLLER.to_string());
        actions.push(format!("{}#clicked", CONTROLLER));
    }

    let controllers = dedup_words(controllers);
    let actions = dedup_words(actions);
    if !controllers.is_empty() {
        data.push(("controller".to_string(), controllers.join(" ")));
    }
    if !actions.is_empty() {
        data.push(("action".to_string(), actions.join(" ")));
    }

    let palette = config.palette();
    let mut classes: Vec<String> = Vec::new();
    classes.extend(
        config.size.button_classes().iter().map(|s| s.to_string()),
    );
    classes.extend(config.variant.color_classes(&palette));
    classes.extend(BASE_STYLE.iter().map(|s| s.to_string()));
    classes.extend(split_words(&config.transition));
    classes.extend(split_words(&html_options.class));
    let classes = dedup_words(classes);

    let mut attrs = html_options.attrs.clone();
    let is_button = config.is_button();
    if is_button {
        set_attr(&mut attrs, "type", config.role.as_str());
    }

    let mut url = None;
    if !is_button {
        if let Some(link) = &config.link {
            url = Some(link.url.clone());
            // link-specific options win over computed attributes
            for (key, value) in &link.options {
                set_attr(&mut attrs, key, value);
            }
        }
    }

    RenderAttributes {
        is_button,
        classes,
        data,
        attrs,
        url,
    }
}

/// Classes for the embedded icon: size classes plus the tint. An explicit
/// icon color replaces the variant tint template.
pub fn icon_classes(config: &ButtonConfig) -> Vec<String> {
    let mut classes: Vec<String> = config
        .icon_size()
        .icon_classes()
        .iter()
        .map(|s| s.to_string())
        .collect();
    match &config.icon.color {
        Some(color) => {
            classes.push("fill-current".to_string());
            classes.push(color.clone());
        }
        None => {
            classes.extend(
                config.variant.icon_color_classes(&config.palette()),
            );
        }
    }
    classes
}

/// The spinner class string; starts hidden until the click behavior
/// reveals it.
pub fn spinner_class(config: &ButtonConfig, spinner: &Spinner) -> String {
    match &spinner.class {
        Some(class) => class.clone(),
        None => format!(
            "animate-spin {} hidden",
            config.icon_size().icon_classes().join(" ")
        ),
    }
}

fn split_words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Order-preserving de-duplication; empty entries dropped.
fn dedup_words(words: Vec<String>) -> Vec<String> {
    let mut deduped: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        if !word.is_empty() && !deduped.contains(&word) {
            deduped.push(word);
        }
    }
    deduped
}

fn set_attr(attrs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match attrs.iter_mut().find(|(k, _)| k == key) {
        Some(entry) => entry.1 = value.to_string(),
        None => attrs.push((key.to_string(), value.to_string())),
    }
}
