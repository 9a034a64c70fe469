//! Builds GraphQL query and mutation documents from statically declared Rust
//! types.
//!
//! Each type describes its shape through the [`Selectable`] trait (usually
//! derived with `structql::Selectable`). Fields carry small annotation tags
//! (see [`parse_tag`]) that rename, alias, parameterize or conditionally
//! include them. The first time a type is marshaled its [`Field`] tree is
//! built and stored in the process-wide [`TreeCache`]; every later call only
//! renders, optionally filtered through a sparse [`Fieldset`].
//!
//! ```rust
//! use structql_core::Selectable;
//! use structql_core::Shape;
//! use structql_core::ShapeField;
//!
//! struct User;
//! impl Selectable for User {
//!     fn shape() -> Shape {
//!         Shape::Struct {
//!             name: "User",
//!             type_name: std::any::type_name::<Self>(),
//!             fields: vec![
//!                 ShapeField::new("id", "", <String as Selectable>::shape),
//!                 ShapeField::new("name", "", <String as Selectable>::shape),
//!             ],
//!         }
//!     }
//! }
//!
//! struct GetUser;
//! impl Selectable for GetUser {
//!     fn shape() -> Shape {
//!         Shape::Struct {
//!             name: "GetUser",
//!             type_name: std::any::type_name::<Self>(),
//!             fields: vec![ShapeField::new(
//!                 "user",
//!                 "user(id:$id<ID!>)",
//!                 <User as Selectable>::shape,
//!             )],
//!         }
//!     }
//! }
//!
//! let query = structql_core::marshal_query::<GetUser>(None).unwrap();
//! assert_eq!(query, "query($id: ID!) {\nuser(id: $id) {\nid\nname\n}\n}");
//! ```

#[cfg(test)]
#[macro_use]
mod test_utils;

mod field;
mod fieldset;
mod naming;
mod operation;
mod shape;
mod tag;
mod tree_builder;

pub use field::Declaration;
pub use field::Directive;
pub use field::DirectiveKind;
pub use field::Field;
pub use field::Token;
pub use fieldset::Fieldset;
pub use fieldset::Selection;
pub use naming::to_lower_camel_case;
pub use operation::collect_variables;
pub use operation::CollectVariablesError;
pub use operation::marshal;
pub use operation::marshal_mutation;
pub use operation::marshal_operation;
pub use operation::marshal_operation_with_cache;
pub use operation::marshal_query;
pub use operation::MarshalError;
pub use operation::MarshaledOperation;
pub use operation::OperationKind;
pub use operation::render_operation;
pub use operation::RenderError;
pub use operation::VariableDefinition;
pub use shape::Selectable;
pub use shape::Shape;
pub use shape::ShapeField;
pub use tag::parse_tag;
pub use tag::TagParseError;
pub use tree_builder::build_field_tree;
pub use tree_builder::ShapeNode;
pub use tree_builder::TreeBuildError;
pub use tree_builder::TreeCache;
pub use tree_builder::walk;
