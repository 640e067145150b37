pub mod error;
pub mod naming;
pub mod summary;
pub mod topics;

pub use error::*;
pub use summary::*;
pub use topics::*;
