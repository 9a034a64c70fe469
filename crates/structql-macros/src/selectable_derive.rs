use crate::selectable_derive_error::SelectableDeriveError;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Field;
use syn::Fields;
use syn::Generics;
use syn::LitStr;
use syn::Visibility;
use syn::ext::IdentExt;
use syn::parse_quote;
use syn::spanned::Spanned;

type Result<T> = std::result::Result<T, SelectableDeriveError>;

const ATTRIBUTE_NAME: &str = "structql";
const SKIP_TAG: &str = "-";

pub(crate) fn expand_selectable(input: &DeriveInput) -> Result<TokenStream> {
    let ident = &input.ident;
    let generics = add_selectable_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let shape = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => {
                let struct_name = ident.unraw().to_string();
                let mut shape_fields = vec![];
                for field in &named.named {
                    if let Some(shape_field) = expand_field(field)? {
                        shape_fields.push(shape_field);
                    }
                }

                quote! {
                    ::structql::Shape::Struct {
                        name: #struct_name,
                        type_name: ::std::any::type_name::<Self>(),
                        fields: ::std::vec![#(#shape_fields),*],
                    }
                }
            },

            Fields::Unnamed(_) | Fields::Unit => expand_leaf(),
        },

        Data::Enum(_) => expand_leaf(),

        Data::Union(data) => {
            return Err(SelectableDeriveError::new(
                "`Selectable` cannot be derived for unions",
                data.union_token.span,
            ));
        },
    };

    Ok(quote! {
        impl #impl_generics ::structql::Selectable for #ident #ty_generics #where_clause {
            fn shape() -> ::structql::Shape {
                #shape
            }
        }
    })
}

fn expand_leaf() -> TokenStream {
    quote! {
        ::structql::Shape::Leaf {
            type_name: ::std::any::type_name::<Self>(),
        }
    }
}

/// Expand one named struct field into a `ShapeField`, or `None` when the
/// field is not selected.
fn expand_field(field: &Field) -> Result<Option<TokenStream>> {
    let Some(field_ident) = &field.ident else {
        return Ok(None);
    };
    let field_name = field_ident.unraw().to_string();
    let tag = field_tag(field)?;

    if tag.as_ref().is_some_and(|tag| tag.value() == SKIP_TAG) {
        return Ok(None);
    }

    if !matches!(field.vis, Visibility::Public(_)) {
        return match tag {
            Some(tag) => Err(SelectableDeriveError::new(
                format!(
                    "Field `{field_name}` has a `#[{ATTRIBUTE_NAME}]` tag but \
                    is not `pub`; only `pub` fields are selected",
                ),
                tag.span(),
            )),
            None => Ok(None),
        };
    }

    let tag_value = match &tag {
        Some(tag) => {
            let value = tag.value();
            if let Err(err) = structql_core::parse_tag(value.as_str()) {
                return Err(SelectableDeriveError::new(
                    format!("Invalid tag on field `{field_name}`: {err}"),
                    tag.span(),
                ));
            }
            value
        },
        None => String::new(),
    };

    let ty = &field.ty;
    Ok(Some(quote! {
        ::structql::ShapeField::new(
            #field_name,
            #tag_value,
            <#ty as ::structql::Selectable>::shape,
        )
    }))
}

/// Read the `#[structql("...")]` attribute of a field, if it has one.
fn field_tag(field: &Field) -> Result<Option<LitStr>> {
    let mut tag = None;
    for attr in &field.attrs {
        if !attr.path().is_ident(ATTRIBUTE_NAME) {
            continue
        }

        if tag.is_some() {
            return Err(SelectableDeriveError::new(
                format!("Only one `#[{ATTRIBUTE_NAME}]` attribute is allowed per field"),
                attr.span(),
            ));
        }
        tag = Some(attr.parse_args::<LitStr>()?);
    }
    Ok(tag)
}

fn add_selectable_bounds(mut generics: Generics) -> Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::structql::Selectable));
    }
    generics
}
