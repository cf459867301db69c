pub mod aggregate;
pub mod render;

pub use aggregate::summarize;
pub use render::render_summary;
