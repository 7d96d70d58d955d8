//! # Design Patterns Catalog
//!
//! One small, self-contained example per classic design pattern, grouped the
//! way the Gang of Four catalog groups them. Nothing here is shared between
//! patterns: every module can be read on its own.
//!
//! ## Behavioral
//! - Chain of Responsibility (ATM money piles)
//! - Command (pod bay doors)
//! - Interpreter (integer addition expressions)
//! - Iterator (novellas)
//! - Mediator (colleagues exchanging messages)
//! - Memento (Half-Life save points)
//! - Observer (test chambers)
//! - State (authorization context)
//! - Strategy (print strategies)
//! - Template Method (gardens, computers, code generators)
//! - Visitor (planets)
//!
//! ## Creational
//! - Abstract Factory (burgers)
//! - Builder (Death Star)
//! - Factory Method (currencies)
//! - Monostate (theme settings)
//! - Prototype (moon workers)
//! - Singleton
//!
//! ## Structural
//! - Adapter (superlaser targeting)
//! - Bridge (remote controls)
//! - Composite (whiteboard shapes)
//! - Decorator (coffee)
//! - Facade (defaults storage)
//! - Flyweight (coffee flavors)
//! - Protection Proxy (HAL 9000)
//! - Virtual Proxy (HEV suit)
//!
//! Run the walkthroughs with:
//! ```bash
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! cargo run --bin p3_behavioral
//! cargo run --bin catalog
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod store;
pub mod structural;

pub use catalog::{Category, Locale, PatternInfo};
pub use error::{PatternError, Result};
pub use store::DefaultsStore;
