//! Structured records and enumerations.
//!
//! A structured record rides the wire as a fixed-arity array of its fields
//! in declared order; nothing else (no names, no tags) is emitted, so the
//! layout is stable as long as the declared field list is. A type opts in by
//! implementing [`Record`], almost always through [`skv_record!`], which
//! declares the struct and derives the field count and both field walks from
//! the same field list so they can never disagree.
//!
//! Enumerations ride as their underlying integer; declare them with
//! [`skv_enum!`].
//!
//! A type that needs full control of its wire form skips both macros and
//! implements [`Pack`](crate::Pack) and [`Unpack`](crate::Unpack) directly
//! in terms of other supported kinds.

use crate::encoding::de::MPackStructReader;
use crate::encoding::ser::MPackWriter;
use crate::errors::DecodeError;

/// The structured-record descriptor: a compile-time-fixed field count plus a
/// pair of operations that enumerate the fields in declared order against a
/// writer or a struct cursor.
pub trait Record: Sized {
    /// Declared field count; equals the wire array's length.
    const FIELDS: u32;

    /// Writes every field, in declared order. Must emit exactly
    /// [`FIELDS`](Record::FIELDS) values.
    fn pack_fields(&self, w: &mut MPackWriter);

    /// Reads every field, in declared order, from the cursor.
    fn unpack_fields(r: &mut MPackStructReader<'_>) -> Result<Self, DecodeError>;
}

/// Declares a struct together with its [`Record`], [`Pack`](crate::Pack) and
/// [`Unpack`](crate::Unpack) implementations.
///
/// ```
/// use skvpack::prelude::*;
///
/// skv_record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct TxnStatus {
///         pub txn_id: u64,
///         pub state: String,
///         pub heartbeat: Option<Duration>,
///     }
/// }
///
/// let s = TxnStatus { txn_id: 9, state: "committed".into(), heartbeat: None };
/// let wire = encode_full(&s).unwrap();
/// let back: TxnStatus = decode_full(&wire).unwrap();
/// assert_eq!(back, s);
/// ```
#[macro_export]
macro_rules! skv_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident : $ftype:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($(#[$fmeta])* $fvis $field: $ftype,)*
        }

        impl $crate::Record for $name {
            const FIELDS: u32 = $crate::skv_record!(@count $($field)*);

            fn pack_fields(&self, w: &mut $crate::MPackWriter) {
                $(w.write(&self.$field);)*
            }

            fn unpack_fields(
                r: &mut $crate::MPackStructReader<'_>,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                ::core::result::Result::Ok($name {
                    $($field: r.read()?,)*
                })
            }
        }

        impl $crate::Pack for $name {
            fn pack(&self, w: &mut $crate::MPackWriter) {
                w.start_array(<Self as $crate::Record>::FIELDS as usize);
                $crate::Record::pack_fields(self, w);
                w.finish_array();
            }
        }

        impl $crate::Unpack for $name {
            fn unpack(
                r: $crate::MPackNodeReader<'_>,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                let mut fields = r.struct_reader()?;
                <Self as $crate::Record>::unpack_fields(&mut fields)
            }
        }
    };

    (@count) => { 0u32 };
    (@count $head:ident $($tail:ident)*) => { 1u32 + $crate::skv_record!(@count $($tail)*) };
}

/// Declares an integer-backed enumeration together with its
/// [`Pack`](crate::Pack) and [`Unpack`](crate::Unpack) implementations.
///
/// The wire form is the underlying integer. Decoding a discriminant that no
/// variant declares fails; range checking beyond that is a domain concern.
///
/// ```
/// use skvpack::prelude::*;
///
/// skv_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq)]
///     pub enum FieldType: u8 {
///         Null = 0,
///         Text = 1,
///         Int64 = 2,
///     }
/// }
///
/// let wire = encode_full(&FieldType::Int64).unwrap();
/// assert_eq!(wire.data(), &[0x02]);
/// let back: FieldType = decode_full(&wire).unwrap();
/// assert_eq!(back, FieldType::Int64);
/// ```
#[macro_export]
macro_rules! skv_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $crate::Pack for $name {
            fn pack(&self, w: &mut $crate::MPackWriter) {
                let raw: $repr = match self {
                    $($name::$variant => $value,)+
                };
                w.write(&raw);
            }
        }

        impl $crate::Unpack for $name {
            fn unpack(
                r: $crate::MPackNodeReader<'_>,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                let raw: $repr = r.read()?;
                match raw {
                    $(v if v == $value => ::core::result::Result::Ok($name::$variant),)+
                    _ => ::core::result::Result::Err($crate::DecodeError::TypeMismatch {
                        expected: ::core::concat!(::core::stringify!($name), " discriminant"),
                        found: "integer",
                    }),
                }
            }
        }
    };
}
