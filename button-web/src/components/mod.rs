pub mod buttons;
pub mod icons;
pub mod slidein;
