pub mod config;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod role;

pub use config::*;
pub use error::*;
pub use forms::*;
pub use navigation::*;
pub use role::*;
