pub mod breadcrumb;
pub mod form_field;
pub mod sidebar;

pub use breadcrumb::*;
pub use form_field::*;
pub use sidebar::*;
