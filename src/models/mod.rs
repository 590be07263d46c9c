pub mod author;
pub mod paper;
pub mod session;

pub use author::*;
pub use paper::*;
pub use session::*;
