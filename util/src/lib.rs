#[macro_use]
pub mod if_dbg_else;
pub use self::if_dbg_else::*;
#[macro_use]
pub mod verify;
pub use self::verify::*;
#[macro_use]
pub mod if_then;
pub mod enumset;
pub use self::enumset::*;
pub mod parser;
pub use self::parser::*;
