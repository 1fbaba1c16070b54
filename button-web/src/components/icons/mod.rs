mod embedded_svg;

pub use embedded_svg::embedded_svg;
