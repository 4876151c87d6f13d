pub mod compare;
pub mod core;
pub mod key;


pub use self::compare::*;
pub use self::core::*;
pub use self::key::*;
