//! Helper macro for generating classified port error enums.
//!
//! Each variant carries a display message and may be tagged `; retryable`.
//! The macro derives `thiserror::Error`, emits one snake-case constructor per
//! variant taking `impl Into<_>` for every field, and generates
//! `is_retryable()` from the tags.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )?
                    => $message:expr $(; $tag:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructor $variant [] [] $( $($field : $ty,)* )?);
            )*

            /// Return whether retrying the failed call is expected to help.
            pub fn is_retryable(&self) -> bool {
                match self {
                    $( Self::$variant { .. } => define_port_error!(@tag $($tag)?), )*
                }
            }
        }
    };

    (@tag retryable) => { true };
    (@tag) => { false };

    (@constructor $variant:ident [$($params:tt)*] [$($inits:tt)*]) => {
        ::paste::paste! {
            #[doc = concat!("Build a [`Self::", stringify!($variant), "`] error.")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@constructor $variant:ident [$($params:tt)*] [$($inits:tt)*] $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @constructor
            $variant
            [$($params)* $field: impl Into<$ty>,]
            [$($inits)* $field: $field.into(),]
            $($rest)*
        );
    };
}

pub(crate) use define_port_error;
