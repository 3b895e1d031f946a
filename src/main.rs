//! Demo driver for fixturegen.
//!
//! Registers the demo domain model and prints a batch of generated
//! fixtures. With `--seed` the run is fully reproducible; without it a
//! random seed is drawn and logged so interesting runs can be replayed.
//!
//! ```bash
//! fixturegen --seed 42 --count 3
//! ```

mod domain;

use crate::domain::Shape;
use clap::Parser;
use fixture_generator::Engine;

#[derive(Parser)]
#[command(name = "fixturegen")]
#[command(about = "Constructor-driven random test fixture generator")]
struct Cli {
    /// Seed for reproducible generation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Extra products and examples to generate
    #[arg(long, default_value_t = 3)]
    count: usize,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "generating fixtures");

    let catalog = domain::catalog();
    let mut engine = Engine::new(&catalog, seed);

    let cart: domain::Cart = engine.generate()?;
    println!("Cart: {cart:#?}");

    let product: domain::Product = engine.generate()?;
    println!("Product: {product:?}");

    let node: domain::BinaryTreeNode = engine.generate()?;
    println!("BinaryTreeNode: {node:#?}");

    let example: domain::Example = engine.generate()?;
    println!("Example: {example:?}");

    let rectangle: domain::Rectangle = engine.generate()?;
    println!(
        "Rectangle: {rectangle:?} (area {:.2}, perimeter {:.2})",
        rectangle.area(),
        rectangle.perimeter()
    );

    let triangle: domain::Triangle = engine.generate()?;
    println!(
        "Triangle: {triangle:?} (area {:.2}, perimeter {:.2})",
        triangle.area(),
        triangle.perimeter()
    );

    let shape: Box<dyn domain::Shape> = engine.generate_trait()?;
    println!(
        "Shape: {shape:?} (area {:.2}, perimeter {:.2})",
        shape.area(),
        shape.perimeter()
    );

    println!("\nMore products:");
    for _ in 0..cli.count {
        let product: domain::Product = engine.generate()?;
        println!("  {product:?}");
    }

    println!("\nMore examples:");
    for _ in 0..cli.count {
        let example: domain::Example = engine.generate()?;
        println!("  {example:?}");
    }

    Ok(())
}
