mod inset;

pub use inset::InsetPolygon2D;
