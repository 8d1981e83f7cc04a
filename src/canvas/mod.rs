//! Fleck canvas: draggable discs and segments with pan and zoom
//!
//! Input arrives in screen coordinates; everything stored here is in world
//! coordinates (see [`view::View`]).

pub mod collision;
pub mod state;
pub mod trail;
pub mod view;

pub use collision::{CollisionResult, Hit, ShapeKind, hit_test};
pub use state::CanvasState;
pub use trail::Trail;
pub use view::View;
