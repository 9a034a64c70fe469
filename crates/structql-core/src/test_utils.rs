/// Declares a struct along with a hand-written [`Selectable`](crate::Selectable)
/// implementation, mirroring what the derive macro generates:
///
/// ```ignore
/// selectable_struct!(GetUser {
///     user: User => "user(id:$id<ID!>)",
/// });
/// ```
macro_rules! selectable_struct {
    (@tag) => { "" };
    (@tag $tag:literal) => { $tag };

    (
        $name:ident {
            $( $field:ident : $ty:ty $( => $tag:literal )? ),* $(,)?
        }
    ) => {
        #[allow(dead_code)]
        pub struct $name {
            $( pub $field: $ty, )*
        }

        impl $crate::Selectable for $name {
            fn shape() -> $crate::Shape {
                $crate::Shape::Struct {
                    name: stringify!($name),
                    type_name: std::any::type_name::<Self>(),
                    fields: vec![
                        $(
                            $crate::ShapeField::new(
                                stringify!($field),
                                selectable_struct!(@tag $($tag)?),
                                <$ty as $crate::Selectable>::shape,
                            ),
                        )*
                    ],
                }
            }
        }
    };
}
