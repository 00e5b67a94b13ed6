pub mod dashboard;
pub mod filters;
pub mod system;

pub use dashboard::*;
pub use filters::*;
pub use system::*;
