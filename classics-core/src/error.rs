//! Error types for the classics core library.
//!
//! The algorithms themselves report "no answer" outcomes through `Option`;
//! the only raised failure is selecting an operation that does not exist.

use std::fmt;

use thiserror::Error;

/// Generates a stable machine-readable code enum for an error type.
///
/// Each arm maps an error variant pattern onto a code variant and its string
/// form. Crates downstream of the core reuse this for their own error enums.
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while selecting an algorithm by name.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AlgorithmError {
    /// The requested operation does not name a known algorithm.
    #[error("unknown algorithm `{name}`; expected one of: {expected}")]
    Unknown {
        /// Name supplied by the caller.
        name: String,
        /// Comma-separated list of accepted names.
        expected: ExpectedNames,
    },
}

define_error_codes! {
    /// Machine-readable error codes for [`AlgorithmError`].
    enum AlgorithmErrorCode for AlgorithmError {
        /// The requested operation is not recognised.
        Unknown => Unknown { .. } => "UNKNOWN_ALGORITHM",
    }
}

/// Display helper listing the canonical algorithm names.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExpectedNames;

impl fmt::Display for ExpectedNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for algorithm in crate::Algorithm::ALL {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(algorithm.as_str())?;
            first = false;
        }
        Ok(())
    }
}

/// Convenient result alias for core operations that can fail.
pub type Result<T, E = AlgorithmError> = std::result::Result<T, E>;
