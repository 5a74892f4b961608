//! Safe SQL builder: identifiers from the fixed `books` column list only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub(crate) use builder::quoted;
pub use params::*;
