pub mod artifact;
pub mod conversion;
pub mod definition;
mod loader;

pub use artifact::*;
pub use conversion::*;
pub use definition::*;
