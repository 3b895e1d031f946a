//! Type descriptors and the generatable catalog.
//!
//! The catalog is the explicit replacement for runtime reflection: every
//! type the engine can synthesize is registered up front with its
//! constructor signatures, and every `dyn Trait` contract is registered as
//! a polymorphic entry whose implementers declare themselves via
//! [`ConcreteSpec::implements`]. Entries are immutable after registration.

use crate::args::Args;
use crate::error::GenerateError;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Identity of a target type: its `TypeId` plus a name for diagnostics.
///
/// Works for both sized concrete types and `dyn Trait` contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`.
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type's name, as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Container kinds a constructor parameter may declare.
///
/// Only [`ContainerKind::Sequence`] is synthesizable; the other kinds exist
/// so that a declaration of an unsupported container fails loudly at
/// generation time instead of being silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Ordered, duplicate-permitting sequence (a `Vec`)
    Sequence,
    /// Unordered unique collection
    Set,
    /// Key-value collection
    Mapping,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Sequence => "sequence",
            Self::Set => "set",
            Self::Mapping => "mapping",
        };
        f.write_str(kind)
    }
}

/// Classification of a single constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Produced by the primitive registry
    Primitive(TypeKey),
    /// Produced by the collection synthesizer; `element: None` models a
    /// container whose element type is statically unknown
    Container {
        kind: ContainerKind,
        element: Option<TypeKey>,
    },
    /// Produced by a recursive engine call (concrete type or contract)
    Composite(TypeKey),
}

impl ParamType {
    /// A primitive parameter of type `T`.
    pub fn primitive<T: Any>() -> Self {
        Self::Primitive(TypeKey::of::<T>())
    }

    /// A composite parameter: a registered concrete type or `dyn Trait`
    /// contract.
    pub fn composite<T: ?Sized + Any>() -> Self {
        Self::Composite(TypeKey::of::<T>())
    }

    /// An ordered sequence whose elements are the registered type `T`.
    pub fn sequence_of<T: ?Sized + Any>() -> Self {
        Self::Container {
            kind: ContainerKind::Sequence,
            element: Some(TypeKey::of::<T>()),
        }
    }

    /// A sequence with no statically known element type. Synthesis yields
    /// an empty sequence for these.
    pub fn untyped_sequence() -> Self {
        Self::Container {
            kind: ContainerKind::Sequence,
            element: None,
        }
    }

    /// An arbitrary container declaration.
    pub fn container(kind: ContainerKind, element: Option<TypeKey>) -> Self {
        Self::Container { kind, element }
    }
}

type BuildFn = dyn Fn(&mut Args) -> Result<Box<dyn Any>, GenerateError> + Send + Sync;

/// Fallible conversion from a concrete boxed value to a boxed trait object,
/// itself wrapped in `Box<dyn Any>` for transport through the engine.
pub type UpcastFn = Box<dyn Fn(Box<dyn Any>) -> Result<Box<dyn Any>, GenerateError> + Send + Sync>;

/// One constructor signature of a concrete type: the ordered parameter
/// classifications plus the build closure invoked with the generated
/// arguments.
pub struct ConstructorSpec {
    params: Vec<ParamType>,
    build: Box<BuildFn>,
}

impl ConstructorSpec {
    /// The declared parameter list, in invocation order.
    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Invoke the constructor with an assembled argument list.
    pub fn invoke(&self, args: &mut Args) -> Result<Box<dyn Any>, GenerateError> {
        (self.build)(args)
    }
}

impl fmt::Debug for ConstructorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorSpec")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Builder for registering a concrete type `T` in the catalog.
///
/// A freshly created spec carries the generatable marker; use
/// [`not_generatable`](Self::not_generatable) to declare a type that is
/// visible to the catalog but ineligible for synthesis.
pub struct ConcreteSpec<T: Any> {
    key: TypeKey,
    generatable: bool,
    constructors: Vec<ConstructorSpec>,
    implements: Vec<(TypeKey, UpcastFn)>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any> ConcreteSpec<T> {
    /// Start a spec for `T` with the generatable marker set.
    pub fn new() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            generatable: true,
            constructors: Vec::new(),
            implements: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Remove the generatable marker. The engine rejects such entries with
    /// [`GenerateError::NotGeneratable`].
    pub fn not_generatable(mut self) -> Self {
        self.generatable = false;
        self
    }

    /// Add a constructor signature. The build closure consumes the
    /// generated arguments positionally via [`Args`].
    pub fn constructor(
        mut self,
        params: Vec<ParamType>,
        build: impl Fn(&mut Args) -> Result<T, GenerateError> + Send + Sync + 'static,
    ) -> Self {
        self.constructors.push(ConstructorSpec {
            params,
            build: Box::new(move |args| Ok(Box::new(build(args)?) as Box<dyn Any>)),
        });
        self
    }

    /// Declare that `T` satisfies the contract `I`, with the upcast used
    /// when a generated `T` must be handed out as a `Box<I>`.
    pub fn implements<I: ?Sized + Any>(
        mut self,
        upcast: impl Fn(T) -> Box<I> + Send + Sync + 'static,
    ) -> Self {
        let contract = TypeKey::of::<I>();
        self.implements.push((
            contract,
            Box::new(move |value: Box<dyn Any>| {
                let value = value
                    .downcast::<T>()
                    .map_err(|_| GenerateError::TypeMismatch {
                        expected: type_name::<T>(),
                    })?;
                Ok(Box::new(upcast(*value)) as Box<dyn Any>)
            }),
        ));
        self
    }
}

impl<T: Any> Default for ConcreteSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Descriptor body for a concrete entry.
pub struct ConcreteEntry {
    constructors: Vec<ConstructorSpec>,
    implements: Vec<(TypeKey, UpcastFn)>,
}

impl ConcreteEntry {
    /// The registered constructor signatures.
    pub fn constructors(&self) -> &[ConstructorSpec] {
        &self.constructors
    }

    /// Whether this type declared the given contract.
    pub fn implements(&self, contract: TypeId) -> bool {
        self.implements.iter().any(|(key, _)| key.id() == contract)
    }

    /// The upcast closure for the given contract, if declared.
    pub fn upcast_for(&self, contract: TypeId) -> Option<&UpcastFn> {
        self.implements
            .iter()
            .find(|(key, _)| key.id() == contract)
            .map(|(_, upcast)| upcast)
    }
}

/// Capability class of a catalog entry.
pub enum EntryKind {
    /// Directly constructible type
    Concrete(ConcreteEntry),
    /// `dyn Trait` contract, resolved to an implementer at generation time
    Polymorphic,
}

impl std::fmt::Debug for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Concrete(_) => f.write_str("Concrete"),
            EntryKind::Polymorphic => f.write_str("Polymorphic"),
        }
    }
}

/// A registered type descriptor.
#[derive(Debug)]
pub struct TypeEntry {
    key: TypeKey,
    generatable: bool,
    kind: EntryKind,
}

impl TypeEntry {
    /// The entry's type key.
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// The entry's type name.
    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    /// Whether the entry carries the generatable marker.
    pub fn is_generatable(&self) -> bool {
        self.generatable
    }

    /// The entry's capability class.
    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// The concrete descriptor body, if this entry is concrete.
    pub fn as_concrete(&self) -> Option<&ConcreteEntry> {
        match &self.kind {
            EntryKind::Concrete(concrete) => Some(concrete),
            EntryKind::Polymorphic => None,
        }
    }
}

/// Registry of all type descriptors the engine may synthesize.
///
/// Registering twice under the same key replaces the earlier entry.
#[derive(Default)]
pub struct Catalog {
    entries: HashMap<TypeId, TypeEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a concrete type descriptor.
    pub fn register<T: Any>(&mut self, spec: ConcreteSpec<T>) {
        let entry = TypeEntry {
            key: spec.key,
            generatable: spec.generatable,
            kind: EntryKind::Concrete(ConcreteEntry {
                constructors: spec.constructors,
                implements: spec.implements,
            }),
        };
        self.entries.insert(entry.key.id(), entry);
    }

    /// Register a polymorphic contract (`dyn Trait`) with the generatable
    /// marker set.
    pub fn register_contract<I: ?Sized + Any>(&mut self) {
        self.insert_contract::<I>(true);
    }

    /// Register a polymorphic contract without the generatable marker.
    /// The engine rejects it with [`GenerateError::NotGeneratable`] before
    /// attempting resolution, matching the treatment of unmarked concrete
    /// types.
    pub fn register_contract_not_generatable<I: ?Sized + Any>(&mut self) {
        self.insert_contract::<I>(false);
    }

    fn insert_contract<I: ?Sized + Any>(&mut self, generatable: bool) {
        let key = TypeKey::of::<I>();
        self.entries.insert(
            key.id(),
            TypeEntry {
                key,
                generatable,
                kind: EntryKind::Polymorphic,
            },
        );
    }

    /// Look up an entry by type identity.
    pub fn get(&self, id: TypeId) -> Option<&TypeEntry> {
        self.entries.get(&id)
    }

    /// Iterate over all registered entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.values()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no registered entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Arg, Args};

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    trait Marker {}
    impl Marker for Point {}

    fn point_spec() -> ConcreteSpec<Point> {
        ConcreteSpec::<Point>::new().constructor(
            vec![ParamType::primitive::<i32>(), ParamType::primitive::<i32>()],
            |args| {
                Ok(Point {
                    x: args.take()?,
                    y: args.take()?,
                })
            },
        )
    }

    #[test]
    fn test_type_key_identity() {
        assert_eq!(TypeKey::of::<Point>(), TypeKey::of::<Point>());
        assert_ne!(TypeKey::of::<Point>().id(), TypeKey::of::<i32>().id());
        assert!(TypeKey::of::<Point>().name().ends_with("Point"));
        assert!(TypeKey::of::<dyn Marker>().name().contains("Marker"));
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = Catalog::new();
        catalog.register(point_spec());

        let entry = catalog.get(TypeKey::of::<Point>().id()).unwrap();
        assert!(entry.is_generatable());
        let concrete = entry.as_concrete().unwrap();
        assert_eq!(concrete.constructors().len(), 1);
        assert_eq!(concrete.constructors()[0].arity(), 2);
    }

    #[test]
    fn test_not_generatable_marker() {
        let mut catalog = Catalog::new();
        catalog.register(point_spec().not_generatable());

        let entry = catalog.get(TypeKey::of::<Point>().id()).unwrap();
        assert!(!entry.is_generatable());
    }

    #[test]
    fn test_contract_entry_is_polymorphic() {
        let mut catalog = Catalog::new();
        catalog.register_contract::<dyn Marker>();

        let entry = catalog.get(TypeKey::of::<dyn Marker>().id()).unwrap();
        assert!(entry.is_generatable());
        assert!(entry.as_concrete().is_none());
    }

    #[test]
    fn test_contract_without_marker() {
        let mut catalog = Catalog::new();
        catalog.register_contract_not_generatable::<dyn Marker>();

        let entry = catalog.get(TypeKey::of::<dyn Marker>().id()).unwrap();
        assert!(!entry.is_generatable());
        assert!(entry.as_concrete().is_none());
    }

    #[test]
    fn test_implements_and_upcast() {
        let mut catalog = Catalog::new();
        catalog.register(point_spec().implements::<dyn Marker>(|p| Box::new(p)));

        let entry = catalog.get(TypeKey::of::<Point>().id()).unwrap();
        let concrete = entry.as_concrete().unwrap();
        assert!(concrete.implements(TypeKey::of::<dyn Marker>().id()));
        assert!(!concrete.implements(TypeKey::of::<i32>().id()));

        let upcast = concrete
            .upcast_for(TypeKey::of::<dyn Marker>().id())
            .unwrap();
        let boxed = upcast(Box::new(Point { x: 1, y: 2 })).unwrap();
        assert!(boxed.downcast::<Box<dyn Marker>>().is_ok());
    }

    #[test]
    fn test_constructor_invoke() {
        let mut catalog = Catalog::new();
        catalog.register(point_spec());

        let entry = catalog.get(TypeKey::of::<Point>().id()).unwrap();
        let ctor = &entry.as_concrete().unwrap().constructors()[0];

        let mut args = Args::new(
            "Point",
            vec![Arg::Value(Box::new(3i32)), Arg::Value(Box::new(4i32))],
        );
        let value = ctor.invoke(&mut args).unwrap();
        assert_eq!(*value.downcast::<Point>().unwrap(), Point { x: 3, y: 4 });
    }

    #[test]
    fn test_param_type_helpers() {
        assert!(matches!(
            ParamType::sequence_of::<Point>(),
            ParamType::Container {
                kind: ContainerKind::Sequence,
                element: Some(_),
            }
        ));
        assert!(matches!(
            ParamType::untyped_sequence(),
            ParamType::Container { element: None, .. }
        ));
    }
}
