pub mod extract;
pub mod media;
mod patterns;

pub use extract::*;
pub use media::*;
