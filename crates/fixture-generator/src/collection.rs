//! Fixed-size container synthesis.

use crate::engine::Engine;
use fixture_core::{Arg, ContainerKind, GenerateError, TypeKey};

/// Number of elements synthesized for every sequence parameter.
pub const SEQUENCE_LEN: usize = 5;

/// Synthesize a container argument.
///
/// Only [`ContainerKind::Sequence`] is supported; any other kind fails
/// with [`GenerateError::UnsupportedContainer`]. Each element is delegated
/// to the engine at `depth + 1`. A container whose element type is
/// statically unknown yields an empty sequence rather than failing.
pub fn synthesize(
    engine: &mut Engine<'_>,
    kind: ContainerKind,
    element: Option<TypeKey>,
    depth: usize,
) -> Result<Arg, GenerateError> {
    if kind != ContainerKind::Sequence {
        return Err(GenerateError::UnsupportedContainer { kind });
    }

    let Some(element) = element else {
        return Ok(Arg::Sequence(Vec::new()));
    };

    let mut items = Vec::with_capacity(SEQUENCE_LEN);
    for _ in 0..SEQUENCE_LEN {
        items.push(engine.generate_arg(element, depth + 1)?);
    }
    Ok(Arg::Sequence(items))
}
