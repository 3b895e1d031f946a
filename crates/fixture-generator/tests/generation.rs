//! End-to-end generation tests over self-contained fixture catalogs.

use fixture_core::{Catalog, ConcreteSpec, GenerateError, ParamType};
use fixture_generator::{Engine, SEQUENCE_LEN};
use std::collections::HashSet;

#[derive(Debug, PartialEq)]
struct Widget {
    id: i64,
    label: String,
}

fn widget_spec() -> ConcreteSpec<Widget> {
    ConcreteSpec::<Widget>::new().constructor(
        vec![
            ParamType::primitive::<i64>(),
            ParamType::primitive::<String>(),
        ],
        |args| {
            Ok(Widget {
                id: args.take()?,
                label: args.take()?,
            })
        },
    )
}

#[test]
fn generates_exactly_the_requested_type() {
    let mut catalog = Catalog::new();
    catalog.register(widget_spec());
    let mut engine = Engine::new(&catalog, 42);

    let widget: Widget = engine.generate().unwrap();
    assert!(widget.label.starts_with("str_"));
}

#[test]
fn primitive_bottoming_types_never_hit_the_depth_bound() {
    let mut catalog = Catalog::new();
    catalog.register(widget_spec());
    let mut engine = Engine::new(&catalog, 42);

    for _ in 0..100 {
        engine.generate::<Widget>().unwrap();
    }
}

mod depth_chain {
    use super::*;

    #[derive(Debug)]
    pub struct E {
        pub value: i32,
    }
    #[derive(Debug)]
    pub struct D {
        pub e: Option<E>,
    }
    #[derive(Debug)]
    pub struct C {
        pub d: Option<D>,
    }
    #[derive(Debug)]
    pub struct B {
        pub c: Option<C>,
    }
    #[derive(Debug)]
    pub struct A {
        pub b: Option<B>,
    }

    pub fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register(
            ConcreteSpec::<E>::new().constructor(vec![ParamType::primitive::<i32>()], |args| {
                Ok(E { value: args.take()? })
            }),
        );
        catalog.register(
            ConcreteSpec::<D>::new().constructor(vec![ParamType::composite::<E>()], |args| {
                Ok(D { e: args.take_opt()? })
            }),
        );
        catalog.register(
            ConcreteSpec::<C>::new().constructor(vec![ParamType::composite::<D>()], |args| {
                Ok(C { d: args.take_opt()? })
            }),
        );
        catalog.register(
            ConcreteSpec::<B>::new().constructor(vec![ParamType::composite::<C>()], |args| {
                Ok(B { c: args.take_opt()? })
            }),
        );
        catalog.register(
            ConcreteSpec::<A>::new().constructor(vec![ParamType::composite::<B>()], |args| {
                Ok(A { b: args.take_opt()? })
            }),
        );
        catalog
    }
}

#[test]
fn depth_bound_cuts_the_chain_at_level_three() {
    let catalog = depth_chain::catalog();
    let mut engine = Engine::new(&catalog, 42);

    for _ in 0..20 {
        let a: depth_chain::A = engine.generate().unwrap();

        // Levels 0-2 are populated, level 3 is absent
        let b = a.b.expect("level 1 should be populated");
        let c = b.c.expect("level 2 should be populated");
        assert!(c.d.is_none(), "level 3 should hit the depth bound");
    }
}

#[test]
fn self_referential_sequences_terminate() {
    #[derive(Debug)]
    struct Nested {
        children: Vec<Option<Nested>>,
    }

    let mut catalog = Catalog::new();
    catalog.register(ConcreteSpec::<Nested>::new().constructor(
        vec![ParamType::sequence_of::<Nested>()],
        |args| {
            Ok(Nested {
                children: args.take_seq_opt()?,
            })
        },
    ));
    let mut engine = Engine::new(&catalog, 42);

    for _ in 0..10 {
        let nested: Nested = engine.generate().unwrap();

        // Direct children sit within the bound and are populated
        assert_eq!(nested.children.len(), SEQUENCE_LEN);
        assert!(nested.children.iter().all(Option::is_some));
        for child in nested.children.iter().flatten() {
            // Grandchildren sit past the bound and must be absent
            assert_eq!(child.children.len(), SEQUENCE_LEN);
            assert!(child.children.iter().all(Option::is_none));
        }
    }
}

mod pets {
    use super::*;

    pub trait Pet {
        fn species(&self) -> &'static str;
    }

    pub struct Cat;
    pub struct Dog;
    pub struct Parrot;

    impl Pet for Cat {
        fn species(&self) -> &'static str {
            "cat"
        }
    }
    impl Pet for Dog {
        fn species(&self) -> &'static str {
            "dog"
        }
    }
    impl Pet for Parrot {
        fn species(&self) -> &'static str {
            "parrot"
        }
    }

    pub fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register_contract::<dyn Pet>();
        catalog.register(
            ConcreteSpec::<Cat>::new()
                .constructor(Vec::new(), |_| Ok(Cat))
                .implements::<dyn Pet>(|cat| Box::new(cat)),
        );
        catalog.register(
            ConcreteSpec::<Dog>::new()
                .constructor(Vec::new(), |_| Ok(Dog))
                .implements::<dyn Pet>(|dog| Box::new(dog)),
        );
        catalog.register(
            ConcreteSpec::<Parrot>::new()
                .constructor(Vec::new(), |_| Ok(Parrot))
                .implements::<dyn Pet>(|parrot| Box::new(parrot)),
        );
        catalog
    }
}

#[test]
fn contract_resolution_covers_every_implementer() {
    let catalog = pets::catalog();
    let mut engine = Engine::new(&catalog, 42);

    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let pet: Box<dyn pets::Pet> = engine.generate_trait().unwrap();
        seen.insert(pet.species());
    }

    assert_eq!(seen.len(), 3, "all implementers should be represented");
}

#[test]
fn contract_without_implementers_always_fails() {
    trait Ghost: std::fmt::Debug {}

    let mut catalog = Catalog::new();
    catalog.register_contract::<dyn Ghost>();
    let mut engine = Engine::new(&catalog, 42);

    for _ in 0..10 {
        let err = engine.generate_trait::<dyn Ghost>().unwrap_err();
        assert!(matches!(err, GenerateError::NoImplementation(_)));
    }
}

#[derive(Debug)]
struct Crate {
    widgets: Vec<Widget>,
}

#[test]
fn sequence_parameters_get_exactly_five_elements() {
    let mut catalog = Catalog::new();
    catalog.register(widget_spec());
    catalog.register(ConcreteSpec::<Crate>::new().constructor(
        vec![ParamType::sequence_of::<Widget>()],
        |args| {
            Ok(Crate {
                widgets: args.take_seq()?,
            })
        },
    ));
    let mut engine = Engine::new(&catalog, 42);

    let boxed: Crate = engine.generate().unwrap();
    assert_eq!(boxed.widgets.len(), SEQUENCE_LEN);
    for widget in &boxed.widgets {
        assert!(widget.label.starts_with("str_"));
    }
}

#[test]
fn untyped_sequence_degrades_to_empty() {
    let mut catalog = Catalog::new();
    catalog.register(ConcreteSpec::<Crate>::new().constructor(
        vec![ParamType::untyped_sequence()],
        |args| {
            Ok(Crate {
                widgets: args.take_seq()?,
            })
        },
    ));
    let mut engine = Engine::new(&catalog, 42);

    let empty: Crate = engine.generate().unwrap();
    assert!(empty.widgets.is_empty());
}

#[test]
fn same_seed_reproduces_the_same_instance() {
    let mut catalog = Catalog::new();
    catalog.register(widget_spec());

    let mut engine1 = Engine::new(&catalog, 1234);
    let mut engine2 = Engine::new(&catalog, 1234);

    for _ in 0..10 {
        let a: Widget = engine1.generate().unwrap();
        let b: Widget = engine2.generate().unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn nested_faults_propagate_unchanged() {
    #[derive(Debug)]
    struct Outer;

    trait Missing {}

    let mut catalog = Catalog::new();
    catalog.register_contract::<dyn Missing>();
    catalog.register(ConcreteSpec::<Outer>::new().constructor(
        vec![ParamType::composite::<dyn Missing>()],
        |args| {
            let _: Option<Box<dyn Missing>> = args.take_opt()?;
            Ok(Outer)
        },
    ));
    let mut engine = Engine::new(&catalog, 42);

    // The resolver fault inside the nested parameter surfaces at the top
    let err = engine.generate::<Outer>().unwrap_err();
    assert!(matches!(err, GenerateError::NoImplementation(_)));
}
