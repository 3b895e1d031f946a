//! Fault taxonomy for fixture generation.

use crate::catalog::ContainerKind;

/// Error type for generation operations.
///
/// Every fault surfaces unchanged to the top-level caller; the engine never
/// retries, substitutes fallback values, or returns partially-built
/// instances. The only non-fault early exit is the depth-bound absent value,
/// which is not represented here.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No descriptor registered under the requested type key
    #[error("no type descriptor registered for `{0}`")]
    UnknownType(&'static str),

    /// Descriptor exists but the type was declared without the generatable marker
    #[error("type `{0}` is not marked generatable")]
    NotGeneratable(&'static str),

    /// The primitive registry has no producer for the requested type
    #[error("cannot produce a primitive value for `{0}`")]
    UnsupportedPrimitive(&'static str),

    /// A container kind other than the ordered sequence was requested
    #[error("container kind `{kind}` is not supported")]
    UnsupportedContainer { kind: ContainerKind },

    /// A polymorphic contract has no generatable concrete implementation
    #[error("no generatable implementation found for `{0}`")]
    NoImplementation(&'static str),

    /// The type's own constructor raised during invocation
    #[error("constructor for `{type_name}` failed: {message}")]
    ConstructionFailed {
        type_name: &'static str,
        message: String,
    },

    /// A constructor consumed an argument under the wrong type
    #[error("constructor for `{constructor}` expected `{expected}` at parameter {position}")]
    ArgumentMismatch {
        constructor: &'static str,
        position: usize,
        expected: &'static str,
    },

    /// A required parameter bottomed out at the depth bound
    #[error(
        "parameter {position} of `{constructor}` hit the depth bound but the constructor \
         requires a value (absorb it with `take_opt` and an Option field)"
    )]
    MissingArgument {
        constructor: &'static str,
        position: usize,
    },

    /// A constructor consumed more arguments than its parameter list declares
    #[error("constructor for `{constructor}` consumed more than {supplied} generated arguments")]
    ArgumentExhausted {
        constructor: &'static str,
        supplied: usize,
    },

    /// A generated value did not downcast to the requested type
    #[error("generated value is not a `{expected}`")]
    TypeMismatch { expected: &'static str },
}

impl GenerateError {
    /// Create a construction failure for a domain constructor that rejected
    /// its generated arguments.
    pub fn construction_failed(type_name: &'static str, message: impl Into<String>) -> Self {
        Self::ConstructionFailed {
            type_name,
            message: message.into(),
        }
    }
}
