//! GPU rendering via wgpu.

pub mod context;
pub mod renderer;

pub use context::{GpuContext, GpuError};
pub use renderer::BarRenderer;
