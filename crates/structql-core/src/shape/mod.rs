mod selectable;
#[allow(clippy::module_inception)]
mod shape;

pub use selectable::Selectable;
pub use shape::Shape;
pub use shape::ShapeField;
