pub mod constants;
pub mod curve;
pub mod output;
pub mod pointer;
pub mod rect;
pub mod scroll;
pub mod signal;
pub mod spring;
pub mod timeline;
pub mod viewport;

pub use constants::*;
pub use curve::*;
pub use output::*;
pub use pointer::*;
pub use rect::*;
pub use scroll::*;
pub use signal::*;
pub use spring::*;
pub use timeline::*;
pub use viewport::*;
