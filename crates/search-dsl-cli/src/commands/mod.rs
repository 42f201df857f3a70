pub mod describe;
pub mod format;
pub mod kinds;
pub mod validate;

pub use describe::*;
pub use format::*;
pub use kinds::*;
pub use validate::*;
