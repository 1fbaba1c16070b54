mod registry;
mod view;

pub use registry::{SlideinPanel, SlideinRegistry};
pub use view::SlideinView;
