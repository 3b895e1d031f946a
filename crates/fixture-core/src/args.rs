//! Typed access to generated constructor arguments.
//!
//! The engine assembles one [`Arg`] per declared parameter and hands the
//! list to the build closure as [`Args`]; the closure consumes it
//! positionally, in declaration order. This is the statically-typed bridge
//! that replaces reflective constructor invocation.

use crate::error::GenerateError;
use std::any::{type_name, Any};

/// One generated argument, as produced by the engine.
pub enum Arg {
    /// A present value (primitive or composite)
    Value(Box<dyn Any>),
    /// The depth bound was reached before this value could be expanded
    Absent,
    /// A synthesized container of element arguments
    Sequence(Vec<Arg>),
}

/// Positional argument list for one constructor invocation.
pub struct Args {
    constructor: &'static str,
    args: std::vec::IntoIter<Arg>,
    supplied: usize,
    position: usize,
}

impl Args {
    /// Wrap the generated arguments for the named constructor.
    pub fn new(constructor: &'static str, args: Vec<Arg>) -> Self {
        let supplied = args.len();
        Self {
            constructor,
            args: args.into_iter(),
            supplied,
            position: 0,
        }
    }

    /// Number of arguments not yet consumed.
    pub fn remaining(&self) -> usize {
        self.args.len()
    }

    /// Consume the next argument as a required value of type `T`.
    ///
    /// Fails with [`GenerateError::MissingArgument`] if generation bottomed
    /// out at the depth bound for this parameter; parameters that can be
    /// reached at the bound should use [`take_opt`](Self::take_opt).
    pub fn take<T: Any>(&mut self) -> Result<T, GenerateError> {
        let (position, arg) = self.next_arg()?;
        match arg {
            Arg::Value(value) => self.downcast(value, position),
            Arg::Absent => Err(GenerateError::MissingArgument {
                constructor: self.constructor,
                position,
            }),
            Arg::Sequence(_) => Err(self.mismatch::<T>(position)),
        }
    }

    /// Consume the next argument as an optional value of type `T`,
    /// absorbing the depth-bound absent value as `None`.
    pub fn take_opt<T: Any>(&mut self) -> Result<Option<T>, GenerateError> {
        let (position, arg) = self.next_arg()?;
        match arg {
            Arg::Value(value) => self.downcast(value, position).map(Some),
            Arg::Absent => Ok(None),
            Arg::Sequence(_) => Err(self.mismatch::<T>(position)),
        }
    }

    /// Consume the next argument as a sequence of required `T` elements.
    pub fn take_seq<T: Any>(&mut self) -> Result<Vec<T>, GenerateError> {
        let (position, arg) = self.next_arg()?;
        let Arg::Sequence(items) = arg else {
            return Err(self.mismatch::<Vec<T>>(position));
        };
        items
            .into_iter()
            .map(|item| match item {
                Arg::Value(value) => self.downcast(value, position),
                Arg::Absent => Err(GenerateError::MissingArgument {
                    constructor: self.constructor,
                    position,
                }),
                Arg::Sequence(_) => Err(self.mismatch::<T>(position)),
            })
            .collect()
    }

    /// Consume the next argument as a sequence of optional `T` elements,
    /// absorbing depth-bound elements as `None`.
    pub fn take_seq_opt<T: Any>(&mut self) -> Result<Vec<Option<T>>, GenerateError> {
        let (position, arg) = self.next_arg()?;
        let Arg::Sequence(items) = arg else {
            return Err(self.mismatch::<Vec<T>>(position));
        };
        items
            .into_iter()
            .map(|item| match item {
                Arg::Value(value) => self.downcast(value, position).map(Some),
                Arg::Absent => Ok(None),
                Arg::Sequence(_) => Err(self.mismatch::<T>(position)),
            })
            .collect()
    }

    fn next_arg(&mut self) -> Result<(usize, Arg), GenerateError> {
        let arg = self
            .args
            .next()
            .ok_or(GenerateError::ArgumentExhausted {
                constructor: self.constructor,
                supplied: self.supplied,
            })?;
        let position = self.position;
        self.position += 1;
        Ok((position, arg))
    }

    fn downcast<T: Any>(&self, value: Box<dyn Any>, position: usize) -> Result<T, GenerateError> {
        value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| self.mismatch::<T>(position))
    }

    fn mismatch<T: ?Sized>(&self, position: usize) -> GenerateError {
        GenerateError::ArgumentMismatch {
            constructor: self.constructor,
            position,
            expected: type_name::<T>(),
        }
    }
}
