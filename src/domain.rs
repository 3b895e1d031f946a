//! Demo domain model: plain data holders registered in the catalog.
//!
//! None of these types contain generation logic; the engine sees each one
//! only as a set of constructor signatures plus the generatable marker.

use fixture_core::{Catalog, ConcreteSpec, ParamType};
use std::fmt;

pub trait Shape: fmt::Debug {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Debug)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}

#[derive(Debug)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(Debug)]
pub struct Triangle {
    pub side_a: f64,
    pub side_b: f64,
    pub side_c: f64,
}

impl Triangle {
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> Self {
        Self {
            side_a,
            side_b,
            side_c,
        }
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        // Heron's formula
        let s = self.perimeter() / 2.0;
        (s * (s - self.side_a) * (s - self.side_b) * (s - self.side_c)).sqrt()
    }

    fn perimeter(&self) -> f64 {
        self.side_a + self.side_b + self.side_c
    }
}

#[derive(Debug)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl Product {
    pub fn new(name: String, price: f64, quantity: i32) -> Self {
        Self {
            name,
            price,
            quantity,
        }
    }

    pub fn sample(name: String) -> Self {
        Self {
            name,
            price: 0.0,
            quantity: 1,
        }
    }
}

#[derive(Debug)]
pub struct Cart {
    pub items: Vec<Product>,
}

impl Cart {
    pub fn new(items: Vec<Product>) -> Self {
        Self { items }
    }
}

#[derive(Debug)]
pub struct BinaryTreeNode {
    pub value: i32,
    pub left: Option<Box<BinaryTreeNode>>,
    pub right: Option<Box<BinaryTreeNode>>,
}

impl BinaryTreeNode {
    pub fn new(
        value: i32,
        left: Option<Box<BinaryTreeNode>>,
        right: Option<Box<BinaryTreeNode>>,
    ) -> Self {
        Self { value, left, right }
    }
}

#[derive(Debug)]
pub struct Example {
    pub flag: bool,
    pub label: String,
    pub shape: Option<Box<dyn Shape>>,
}

impl Example {
    pub fn new(flag: bool, label: String, shape: Option<Box<dyn Shape>>) -> Self {
        Self { flag, label, shape }
    }

    pub fn labeled(label: String) -> Self {
        Self {
            flag: false,
            label,
            shape: None,
        }
    }
}

/// Build the demo catalog: every generatable type with its constructor
/// signatures, plus the `Shape` contract and its implementers.
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.register_contract::<dyn Shape>();

    catalog.register(
        ConcreteSpec::<Circle>::new()
            .constructor(vec![ParamType::primitive::<f64>()], |args| {
                Ok(Circle::new(args.take()?))
            })
            .implements::<dyn Shape>(|circle| Box::new(circle)),
    );

    catalog.register(
        ConcreteSpec::<Rectangle>::new()
            .constructor(
                vec![ParamType::primitive::<f64>(), ParamType::primitive::<f64>()],
                |args| Ok(Rectangle::new(args.take()?, args.take()?)),
            )
            .implements::<dyn Shape>(|rectangle| Box::new(rectangle)),
    );

    catalog.register(
        ConcreteSpec::<Triangle>::new()
            .constructor(
                vec![
                    ParamType::primitive::<f64>(),
                    ParamType::primitive::<f64>(),
                    ParamType::primitive::<f64>(),
                ],
                |args| Ok(Triangle::new(args.take()?, args.take()?, args.take()?)),
            )
            .implements::<dyn Shape>(|triangle| Box::new(triangle)),
    );

    catalog.register(
        ConcreteSpec::<Product>::new()
            .constructor(
                vec![
                    ParamType::primitive::<String>(),
                    ParamType::primitive::<f64>(),
                    ParamType::primitive::<i32>(),
                ],
                |args| Ok(Product::new(args.take()?, args.take()?, args.take()?)),
            )
            .constructor(vec![ParamType::primitive::<String>()], |args| {
                Ok(Product::sample(args.take()?))
            }),
    );

    catalog.register(ConcreteSpec::<Cart>::new().constructor(
        vec![ParamType::sequence_of::<Product>()],
        |args| Ok(Cart::new(args.take_seq()?)),
    ));

    catalog.register(ConcreteSpec::<BinaryTreeNode>::new().constructor(
        vec![
            ParamType::primitive::<i32>(),
            ParamType::composite::<BinaryTreeNode>(),
            ParamType::composite::<BinaryTreeNode>(),
        ],
        |args| {
            Ok(BinaryTreeNode::new(
                args.take()?,
                args.take_opt()?.map(Box::new),
                args.take_opt()?.map(Box::new),
            ))
        },
    ));

    catalog.register(
        ConcreteSpec::<Example>::new()
            .constructor(
                vec![
                    ParamType::primitive::<bool>(),
                    ParamType::primitive::<String>(),
                    ParamType::composite::<dyn Shape>(),
                ],
                |args| Ok(Example::new(args.take()?, args.take()?, args.take_opt()?)),
            )
            .constructor(vec![ParamType::primitive::<String>()], |args| {
                Ok(Example::labeled(args.take()?))
            }),
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_generator::{Engine, SEQUENCE_LEN};

    #[test]
    fn test_demo_catalog_generates_every_type() {
        let catalog = catalog();
        let mut engine = Engine::new(&catalog, 42);

        let cart: Cart = engine.generate().unwrap();
        assert_eq!(cart.items.len(), SEQUENCE_LEN);

        engine.generate::<Product>().unwrap();
        engine.generate::<BinaryTreeNode>().unwrap();
        engine.generate::<Example>().unwrap();
        engine.generate::<Rectangle>().unwrap();
        engine.generate::<Triangle>().unwrap();
        engine.generate::<Circle>().unwrap();
        engine.generate_trait::<dyn Shape>().unwrap();
    }

    #[test]
    fn test_tree_depth_is_bounded() {
        let catalog = catalog();
        let mut engine = Engine::new(&catalog, 7);

        for _ in 0..10 {
            let root: BinaryTreeNode = engine.generate().unwrap();
            let mut frontier = vec![(&root, 0usize)];
            while let Some((node, level)) = frontier.pop() {
                assert!(level < 3, "no node should sit deeper than the bound");
                if let Some(left) = node.left.as_deref() {
                    frontier.push((left, level + 1));
                }
                if let Some(right) = node.right.as_deref() {
                    frontier.push((right, level + 1));
                }
            }
        }
    }
}
