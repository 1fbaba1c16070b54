mod hotkey;

pub use hotkey::hotkey_label;
