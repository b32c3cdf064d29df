#![allow(ambiguous_glob_reexports)]

pub mod get_randomness;
pub mod initialize;
pub mod request_randomness;

pub use get_randomness::*;
pub use initialize::*;
pub use request_randomness::*;
