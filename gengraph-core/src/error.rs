//! Error types for the gengraph core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::{fmt, io, num::ParseIntError};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while parsing generator input or writing a listing.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphGenError {
    /// The vertex count was not a non-negative integer.
    #[error("vertex count `{raw}` is not a non-negative integer")]
    InvalidVertexCount {
        /// Text supplied by the caller.
        raw: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// Writing a record to the output sink failed.
    #[error("failed to write graph listing")]
    Write {
        /// Error raised by the writer.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphGenError`] variants.
    enum GraphGenErrorCode for GraphGenError {
        /// The vertex count was not a non-negative integer.
        InvalidVertexCount => InvalidVertexCount { .. } => "GENGRAPH_INVALID_VERTEX_COUNT",
        /// Writing a record to the output sink failed.
        WriteFailed => Write { .. } => "GENGRAPH_WRITE_FAILED",
    }
}

/// Convenient result alias for gengraph operations.
pub type Result<T> = core::result::Result<T, GraphGenError>;
