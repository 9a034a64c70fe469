use proc_macro2::Span;

/// An error found while deriving `Selectable`, reported as a
/// `compile_error!` pointing at `span`.
#[derive(Clone, Debug)]
pub(crate) struct SelectableDeriveError {
    pub message: String,
    pub span: Span,
}
impl SelectableDeriveError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    pub fn into_compile_error(self) -> proc_macro2::TokenStream {
        let message = self.message;
        quote::quote_spanned! {self.span=>
            ::core::compile_error!(#message);
        }
    }
}
impl From<syn::Error> for SelectableDeriveError {
    fn from(err: syn::Error) -> Self {
        Self::new(err.to_string(), err.span())
    }
}
