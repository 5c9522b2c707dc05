//! Command implementations

mod content_type;
mod inspect;
mod plan;

pub use content_type::run_content_type;
pub use inspect::run_inspect;
pub use plan::run_plan;
