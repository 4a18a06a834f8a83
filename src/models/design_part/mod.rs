mod impls;
mod structs;

pub use structs::DesignPart;
