pub mod fixtures;
pub mod menu;
pub mod role;
pub mod session;

pub use fixtures::*;
pub use menu::*;
pub use role::*;
pub use session::*;
