//! The recursive generation engine.

use crate::collection;
use crate::primitives::PrimitiveRegistry;
use crate::resolver;
use fixture_core::{
    Arg, Args, Catalog, ConcreteEntry, EntryKind, GenerateError, ParamType, TypeKey,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::any::Any;
use tracing::debug;

/// Nested composite expansions allowed before generation yields an absent
/// value instead of recursing further.
///
/// The bound is checked as a floor: sequence elements sit two levels below
/// their owning constructor and may step past the constant, but still trip
/// the check on the next expansion. This is the termination guarantee for
/// cyclic and deep object graphs, including types reachable through
/// sequences of themselves.
pub const MAX_DEPTH: usize = 3;

/// Recursive fixture engine over a catalog of type descriptors.
///
/// The engine owns a seeded random number generator, so separate engines
/// are fully independent and the same catalog plus the same seed
/// reproduces the same instances. Nothing is cached between calls; the
/// generated instance is owned entirely by the caller.
pub struct Engine<'c> {
    /// Catalog defining the generatable types
    catalog: &'c Catalog,
    /// Producers for primitive parameters
    primitives: PrimitiveRegistry,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
}

impl<'c> Engine<'c> {
    /// Create a new engine over the given catalog and seed.
    pub fn new(catalog: &'c Catalog, seed: u64) -> Self {
        Self {
            catalog,
            primitives: PrimitiveRegistry::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate an instance of the registered concrete type `T`.
    pub fn generate<T: Any>(&mut self) -> Result<T, GenerateError> {
        let key = TypeKey::of::<T>();
        match self.generate_arg(key, 0)? {
            Arg::Value(value) => value
                .downcast::<T>()
                .map(|boxed| *boxed)
                .map_err(|_| GenerateError::TypeMismatch {
                    expected: key.name(),
                }),
            // The depth bound cannot trip at the entry depth, and concrete
            // generation never yields a bare sequence.
            Arg::Absent | Arg::Sequence(_) => Err(GenerateError::TypeMismatch {
                expected: key.name(),
            }),
        }
    }

    /// Generate a boxed instance of the registered contract `I`, resolved
    /// to a random generatable implementer.
    pub fn generate_trait<I: ?Sized + Any>(&mut self) -> Result<Box<I>, GenerateError> {
        let key = TypeKey::of::<I>();
        match self.generate_arg(key, 0)? {
            Arg::Value(value) => value
                .downcast::<Box<I>>()
                .map(|boxed| *boxed)
                .map_err(|_| GenerateError::TypeMismatch {
                    expected: key.name(),
                }),
            Arg::Absent | Arg::Sequence(_) => Err(GenerateError::TypeMismatch {
                expected: key.name(),
            }),
        }
    }

    /// One recursive generation step. Precondition order matters: the
    /// marker check precedes the depth check, which precedes any
    /// inspection of the type's shape.
    pub(crate) fn generate_arg(
        &mut self,
        key: TypeKey,
        depth: usize,
    ) -> Result<Arg, GenerateError> {
        let catalog = self.catalog;
        let entry = catalog
            .get(key.id())
            .ok_or(GenerateError::UnknownType(key.name()))?;

        if !entry.is_generatable() {
            return Err(GenerateError::NotGeneratable(entry.name()));
        }

        if depth >= MAX_DEPTH {
            return Ok(Arg::Absent);
        }

        match entry.kind() {
            EntryKind::Polymorphic => {
                let implementation = resolver::resolve(catalog, key, &mut self.rng)?;
                debug!(
                    contract = key.name(),
                    implementation = implementation.name(),
                    "resolved contract"
                );
                let concrete = implementation
                    .as_concrete()
                    .ok_or(GenerateError::NoImplementation(key.name()))?;

                // Resolving a contract to an implementer does not count as
                // a recursion step.
                let value = self.construct(implementation.key(), concrete, depth)?;
                let upcast = concrete
                    .upcast_for(key.id())
                    .ok_or(GenerateError::NoImplementation(key.name()))?;
                Ok(Arg::Value(upcast(value)?))
            }
            EntryKind::Concrete(concrete) => {
                Ok(Arg::Value(self.construct(entry.key(), concrete, depth)?))
            }
        }
    }

    fn construct(
        &mut self,
        key: TypeKey,
        concrete: &ConcreteEntry,
        depth: usize,
    ) -> Result<Box<dyn Any>, GenerateError> {
        let constructors = concrete.constructors();
        if constructors.is_empty() {
            return Err(GenerateError::construction_failed(
                key.name(),
                "no constructors registered",
            ));
        }

        // Not necessarily the simplest signature: over many runs this
        // exercises every overload of the domain types.
        let index = self.rng.random_range(0..constructors.len());
        let ctor = &constructors[index];
        debug!(
            target_type = key.name(),
            constructor = index,
            arity = ctor.arity(),
            depth,
            "selected constructor"
        );

        let mut values = Vec::with_capacity(ctor.arity());
        for param in ctor.params() {
            values.push(self.generate_param(param, depth)?);
        }

        let mut args = Args::new(key.name(), values);
        ctor.invoke(&mut args)
    }

    fn generate_param(&mut self, param: &ParamType, depth: usize) -> Result<Arg, GenerateError> {
        match *param {
            ParamType::Primitive(key) => {
                Ok(Arg::Value(self.primitives.produce(key, &mut self.rng)?))
            }
            ParamType::Container { kind, element } => {
                collection::synthesize(self, kind, element, depth + 1)
            }
            ParamType::Composite(key) => self.generate_arg(key, depth + 1),
        }
    }
}
