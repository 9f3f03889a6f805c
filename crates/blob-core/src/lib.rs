pub mod constants;
pub mod morph;
pub mod pointer;
pub mod random;
pub mod scene;
pub mod spring;
pub mod synth;
pub mod theme;
pub mod tuning;
pub mod uniforms;
pub static BLOB_WGSL: &str = include_str!("../shaders/blob.wgsl");

pub use morph::*;
pub use pointer::*;
pub use random::*;
pub use scene::*;
pub use spring::*;
pub use synth::*;
pub use theme::*;
pub use tuning::*;
pub use uniforms::*;
