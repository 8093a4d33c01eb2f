//! lupine-api-core: dynamic animation values and shape-aware blending (engine-agnostic)

pub mod blend;
pub mod coercion;
pub mod value;

pub use blend::{lerp_value, step_blend, LerpError};
pub use value::{Value, ValueKind};
