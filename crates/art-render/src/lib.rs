pub mod error;
pub mod flood;
pub mod paint;
pub mod raster;
pub mod surface;

pub use error::ExportError;
pub use flood::{fill_changes, fill_surface, flood_fill};
pub use paint::{paint_faded, paint_shape, render};
pub use surface::Surface;
