//! Creational patterns: how objects come into existence.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod monostate;
pub mod prototype;
pub mod singleton;
