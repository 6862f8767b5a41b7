pub mod hash;
pub mod primitives;
