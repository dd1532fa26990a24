pub mod pages;
pub mod stats;
pub mod system;

pub use pages::*;
pub use stats::*;
pub use system::*;
