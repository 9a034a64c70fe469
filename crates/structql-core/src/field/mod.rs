mod declaration;
mod directive;
#[allow(clippy::module_inception)]
mod field;
mod token;

pub use declaration::Declaration;
pub use directive::Directive;
pub use directive::DirectiveKind;
pub use field::Field;
pub use token::Token;
