mod impls;
mod structs;

pub use structs::{Remainder, RemainderType};
