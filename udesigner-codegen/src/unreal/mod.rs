//! Unreal reflection declaration generators.

pub mod enums;
pub mod functions;
pub mod structs;

pub use enums::EnumGenerator;
pub use functions::FunctionGenerator;
pub use structs::StructGenerator;
