//! Pure data types shared by the pool and the borrowers.

pub mod book;

pub use book::*;
