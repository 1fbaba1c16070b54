use leptos::*;

const SPRITE_PATH: &str = "/assets/icons.svg";

/// Inline `<svg>` referencing a named symbol from the bundled sprite sheet.
/// Icons ship once and take their tint from `fill-current`.
pub fn embedded_svg(name: &str, class: &str) -> HtmlElement<svg::Svg> {
    svg::svg()
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("class", class.to_string())
        .attr("aria-hidden", "true")
        .child(
            svg::use_()
                .attr("href", format!("{}#{}", SPRITE_PATH, name)),
        )
}
