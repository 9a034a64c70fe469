use crate::Shape;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::collections::LinkedList;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

/// A type whose structure can be rendered as a GraphQL selection.
///
/// Structs are usually described with `#[derive(structql::Selectable)]`.
/// Scalars and the standard wrappers (`Option`, `Vec`, `Box`, ...) are
/// implemented here. Custom scalars implement it by returning
/// [`Shape::Leaf`].
pub trait Selectable {
    fn shape() -> Shape;
}

macro_rules! impl_leaf_selectable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Selectable for $ty {
                fn shape() -> Shape {
                    Shape::Leaf {
                        type_name: std::any::type_name::<$ty>(),
                    }
                }
            }
        )*
    };
}

impl_leaf_selectable!(
    bool,
    char,
    f32,
    f64,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    str,
    String,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    (),
    serde_json::Value,
);

macro_rules! impl_wrapper_selectable {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: Selectable> Selectable for $wrapper<T> {
                fn shape() -> Shape {
                    Shape::Wrapped {
                        wrapper: stringify!($wrapper),
                        inner: T::shape,
                    }
                }
            }
        )*
    };
}

impl_wrapper_selectable!(
    BTreeSet,
    HashSet,
    LinkedList,
    Option,
    Vec,
    VecDeque,
);

impl<T: Selectable + ?Sized> Selectable for Arc<T> {
    fn shape() -> Shape {
        Shape::Wrapped {
            wrapper: "Arc",
            inner: T::shape,
        }
    }
}

impl<T: Selectable + ?Sized> Selectable for Box<T> {
    fn shape() -> Shape {
        Shape::Wrapped {
            wrapper: "Box",
            inner: T::shape,
        }
    }
}

impl<T: Selectable + ?Sized> Selectable for Rc<T> {
    fn shape() -> Shape {
        Shape::Wrapped {
            wrapper: "Rc",
            inner: T::shape,
        }
    }
}

impl<T: Selectable + ?Sized> Selectable for &T {
    fn shape() -> Shape {
        Shape::Wrapped {
            wrapper: "&",
            inner: T::shape,
        }
    }
}

impl<T: Selectable> Selectable for [T] {
    fn shape() -> Shape {
        Shape::Wrapped {
            wrapper: "[]",
            inner: T::shape,
        }
    }
}

impl<T: Selectable, const N: usize> Selectable for [T; N] {
    fn shape() -> Shape {
        Shape::Wrapped {
            wrapper: "[; N]",
            inner: T::shape,
        }
    }
}
