//! Domain entities exchanged with the catalog backend.

pub mod product;
