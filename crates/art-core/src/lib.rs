pub mod codegen;
pub mod color;
pub mod config;
pub mod id;
pub mod model;

pub use codegen::{Board, CodeFormat, generate};
pub use color::Color;
pub use config::CanvasConfig;
pub use id::{IdAllocator, ShapeId};
pub use model::*;
