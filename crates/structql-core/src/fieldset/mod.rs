#[allow(clippy::module_inception)]
mod fieldset;
mod fieldset_macro;
mod selection;

pub use fieldset::Fieldset;
pub use selection::Selection;
