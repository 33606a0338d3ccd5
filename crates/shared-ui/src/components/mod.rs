// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod dialog;
pub mod input;
pub mod page_header;

// Primitive wrappers
pub mod avatar;
pub mod label;
pub mod navbar;
pub mod separator;

// Depends on button and separator styling
pub mod sidebar;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use separator::*;
pub use sidebar::*;
