/// Popup markup for a hotkey hint: the action label plus the key combo
/// rendered as `<kbd>` elements.
pub fn hotkey_label(text: &str, keys: &str) -> String {
    let combo = keys
        .split('+')
        .map(|key| {
            format!(
                "<kbd class=\"px-1 text-xs font-mono border rounded\">{}</kbd>",
                key
            )
        })
        .collect::<Vec<String>>()
        .join("+");
    format!("<span class=\"mr-2\">{}</span>{}", text, combo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_wraps_each_key() {
        let markup = hotkey_label("Save", "ctrl+s");
        assert!(markup.starts_with("<span class=\"mr-2\">Save</span>"));
        assert_eq!(markup.matches("<kbd").count(), 2);
        assert!(markup.contains(">ctrl</kbd>"));
        assert!(markup.contains(">s</kbd>"));
    }
}
