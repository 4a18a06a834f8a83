mod impls;
mod structs;

pub use structs::ModuleBar;
