//! Structural patterns: how objects are put together.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod protection_proxy;
pub mod virtual_proxy;
