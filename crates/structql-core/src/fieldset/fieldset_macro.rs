/// Build a [`Fieldset`](crate::Fieldset) literal.
///
/// Each entry maps a field name to either a boolean or a braced nested
/// fieldset:
///
/// ```rust
/// use structql_core::fieldset;
/// use structql_core::Selection;
///
/// let fieldset = fieldset! {
///     "id" => true,
///     "email" => false,
///     "parent" => {
///         "id" => true,
///     },
/// };
///
/// assert_eq!(fieldset.get("id"), Some(&Selection::Leaf(true)));
/// assert_eq!(fieldset.len(), 3);
/// assert!(fieldset.get("parent").unwrap().as_subtree().is_some());
/// ```
#[macro_export]
macro_rules! fieldset {
    (@selection { $($nested:tt)* }) => {
        $crate::Selection::SubTree($crate::fieldset! { $($nested)* })
    };
    (@selection $selected:expr) => {
        $crate::Selection::Leaf($selected)
    };

    ($( $field_name:literal => $selection:tt ),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut fieldset = $crate::Fieldset::new();
        $(
            fieldset.insert($field_name, $crate::fieldset!(@selection $selection));
        )*
        fieldset
    }};
}
