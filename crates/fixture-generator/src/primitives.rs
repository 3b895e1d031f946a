//! Per-type random value producers for primitive parameters.

use fixture_core::{GenerateError, TypeKey};
use rand::rngs::StdRng;
use rand::Rng;
use std::any::{Any, TypeId};
use std::collections::HashMap;

type ProduceFn = fn(&mut StdRng) -> Box<dyn Any>;

/// Fixed mapping from primitive type identity to a random-value producer.
///
/// Supported identities: `i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `bool`,
/// and `String`. Integers are drawn uniformly over the full representable
/// range; floats over `[0, 1)`; strings are `"str_"` plus a random `i32`
/// in decimal (collisions are acceptable, this is not an ID generator).
///
/// Looking up any other identity is a caller bug and fails with
/// [`GenerateError::UnsupportedPrimitive`], never a silent default.
pub struct PrimitiveRegistry {
    producers: HashMap<TypeId, ProduceFn>,
}

impl Default for PrimitiveRegistry {
    fn default() -> Self {
        let mut producers: HashMap<TypeId, ProduceFn> = HashMap::new();
        producers.insert(TypeId::of::<i8>(), |rng| {
            Box::new(rng.random::<i8>()) as Box<dyn Any>
        });
        producers.insert(TypeId::of::<i16>(), |rng| {
            Box::new(rng.random::<i16>()) as Box<dyn Any>
        });
        producers.insert(TypeId::of::<i32>(), |rng| {
            Box::new(rng.random::<i32>()) as Box<dyn Any>
        });
        producers.insert(TypeId::of::<i64>(), |rng| {
            Box::new(rng.random::<i64>()) as Box<dyn Any>
        });
        producers.insert(TypeId::of::<f32>(), |rng| {
            Box::new(rng.random::<f32>()) as Box<dyn Any>
        });
        producers.insert(TypeId::of::<f64>(), |rng| {
            Box::new(rng.random::<f64>()) as Box<dyn Any>
        });
        producers.insert(TypeId::of::<bool>(), |rng| {
            Box::new(rng.random::<bool>()) as Box<dyn Any>
        });
        producers.insert(TypeId::of::<String>(), |rng| {
            Box::new(format!("str_{}", rng.random::<i32>())) as Box<dyn Any>
        });
        Self { producers }
    }
}

impl PrimitiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a producer is registered for the given type.
    pub fn supports(&self, key: TypeKey) -> bool {
        self.producers.contains_key(&key.id())
    }

    /// Produce a random value for the given primitive type.
    pub fn produce(
        &self,
        key: TypeKey,
        rng: &mut StdRng,
    ) -> Result<Box<dyn Any>, GenerateError> {
        let producer = self
            .producers
            .get(&key.id())
            .ok_or(GenerateError::UnsupportedPrimitive(key.name()))?;
        Ok(producer(rng))
    }
}
