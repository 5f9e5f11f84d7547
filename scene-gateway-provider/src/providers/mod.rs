//! Imagery provider implementations

mod planet;

pub use planet::PlanetProvider;
