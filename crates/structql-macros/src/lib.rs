mod selectable_derive;
mod selectable_derive_error;


use syn::DeriveInput;
use syn::parse_macro_input;

/// Derives [`Selectable`](structql::Selectable) for a type.
///
/// On a struct with named fields, every `pub` field is selected, in
/// declaration order, and its name is rendered in lower camel case. A
/// `#[structql("...")]` attribute attaches a tag to the field:
///
/// - `#[structql("user(id:$id<ID!>)")]` renames the field and declares
///   arguments (which also keeps it).
/// - `#[structql("@alias(me)")]`, `#[structql("@skip($hide)")]` and
///   `#[structql("@include($show)")]` add an alias or a directive.
/// - `#[structql("keep")]` renders the field regardless of the fieldset.
/// - `#[structql("-")]` leaves the field out of the operation entirely.
///
/// Tags are validated at compile time. Enums, tuple structs and unit structs
/// derive a leaf shape, which is useful for enum-typed scalar fields.
///
/// ```rust
/// use structql::Selectable;
///
/// #[derive(Selectable)]
/// pub struct User {
///     pub id: String,
///     #[structql("@alias(displayName)")]
///     pub full_name: String,
///     #[structql("-")]
///     pub cached_at: u64,
/// }
///
/// #[derive(Selectable)]
/// pub struct GetUser {
///     #[structql("user(id:$id<ID!>)")]
///     pub user: Option<User>,
/// }
///
/// let query = structql::marshal_query::<GetUser>(None).unwrap();
/// assert_eq!(
///     query,
///     "query($id: ID!) {\nuser(id: $id) {\nid\ndisplayName: fullName\n}\n}",
/// );
/// ```
///
/// Invalid tags fail to compile:
///
/// ```compile_fail
/// use structql::Selectable;
///
/// #[derive(Selectable)]
/// pub struct Broken {
///     #[structql("@deprecated(reason)")]
///     pub field: String,
/// }
/// ```
#[proc_macro_derive(Selectable, attributes(structql))]
pub fn derive_selectable(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match selectable_derive::expand_selectable(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
