pub mod compose;
pub mod layout;
pub mod lift;
pub mod offset;
pub mod pane;

pub use compose::{ComposeOutline, ComposedOutline};
pub use layout::{layout_panes, GridLayout, RadialLayout};
pub use lift::LiftWindow;
pub use offset::InsetPolygon2D;
pub use pane::DerivePaneOutline;
