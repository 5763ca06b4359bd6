//! Opaque fixed-width decimal storage.
//!
//! The platform transports decimals as raw storage bytes: 8 for
//! [`Decimal64`], 16 for [`Decimal128`]. The codec never interprets the
//! contents; arithmetic lives with the decimal library of the deployment,
//! and layout compatibility across nodes is the deployment's concern.

use std::fmt;

macro_rules! opaque_decimal {
    ($(#[$meta:meta])* $name:ident, $width:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name([u8; $width]);

        impl $name {
            /// Width of the wire payload in bytes.
            pub const WIDTH: usize = $width;

            pub const fn from_bytes(bytes: [u8; $width]) -> $name {
                $name(bytes)
            }

            pub const fn to_bytes(self) -> [u8; $width] {
                self.0
            }

            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $width]> for $name {
            fn from(bytes: [u8; $width]) -> $name {
                $name(bytes)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, concat!(stringify!($name), "(0x"))?;
                for b in &self.0 {
                    write!(f, "{:02x}", b)?;
                }
                write!(f, ")")
            }
        }
    };
}

opaque_decimal!(
    /// An 8-byte decimal, transported as a binary payload of exactly 8 bytes.
    Decimal64,
    8
);

opaque_decimal!(
    /// A 16-byte decimal, transported as a binary payload of exactly 16 bytes.
    Decimal128,
    16
);
