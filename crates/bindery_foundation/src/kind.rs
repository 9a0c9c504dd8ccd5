//! The closed set of underlying type representations.

use std::fmt;

/// Underlying representation of a type.
///
/// Many distinct types can share a kind: a named `UserId` type and the base
/// `int64` type are both [`Kind::Int64`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// Boolean.
    Bool,
    /// Platform-width signed integer.
    Int,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Platform-width unsigned integer.
    Uint,
    /// 8-bit unsigned integer.
    Uint8,
    /// 16-bit unsigned integer.
    Uint16,
    /// 32-bit unsigned integer.
    Uint32,
    /// 64-bit unsigned integer.
    Uint64,
    /// Unsigned integer wide enough to hold a pointer.
    Uintptr,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Complex number with 32-bit parts.
    Complex64,
    /// Complex number with 64-bit parts.
    Complex128,
    /// Text.
    String,
    /// Fixed-length array.
    Array,
    /// Variable-length sequence.
    Slice,
    /// Associative map.
    Map,
    /// Record with named fields.
    Struct,
    /// Pointer to another type.
    Pointer,
    /// Dynamic interface (holds any value).
    Interface,
    /// Function.
    Func,
    /// Channel.
    Chan,
    /// Anything not covered above.
    Other,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 26] = [
        Kind::Bool,
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Uint,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Uintptr,
        Kind::Float32,
        Kind::Float64,
        Kind::Complex64,
        Kind::Complex128,
        Kind::String,
        Kind::Array,
        Kind::Slice,
        Kind::Map,
        Kind::Struct,
        Kind::Pointer,
        Kind::Interface,
        Kind::Func,
        Kind::Chan,
        Kind::Other,
    ];

    /// Returns true for bool, integer, float, complex, and string kinds.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Uintptr
                | Self::Float32
                | Self::Float64
                | Self::Complex64
                | Self::Complex128
                | Self::String
        )
    }

    /// Returns true for signed and unsigned integer kinds.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Uintptr
        )
    }

    /// Returns true for kinds whose zero value is nil.
    #[must_use]
    pub const fn is_nillable(self) -> bool {
        matches!(
            self,
            Self::Slice | Self::Map | Self::Pointer | Self::Interface | Self::Func | Self::Chan
        )
    }

    /// The lowercase name of the kind, as used for builtin type names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::Array => "array",
            Self::Slice => "slice",
            Self::Map => "map",
            Self::Struct => "struct",
            Self::Pointer => "ptr",
            Self::Interface => "interface",
            Self::Func => "func",
            Self::Chan => "chan",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
