mod bbox;
mod frame_path;
mod outline;
mod segment;
pub mod shape;

pub use bbox::Aabb2;
pub use frame_path::FramePath;
pub use outline::Outline;
pub use segment::LineSegment2;
pub use shape::WindowShape;
