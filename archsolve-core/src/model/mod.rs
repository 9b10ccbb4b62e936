//! Domain model types for layout generation.

mod corridor;
mod input;
mod kind;
mod room;
mod side;

pub use corridor::Corridor;
pub use input::{LayoutInput, Requirement, Requirements};
pub use kind::{Climate, ClimateRoomType, Facing, RoomType, Tilt};
pub use room::Room;
pub use side::Side;
