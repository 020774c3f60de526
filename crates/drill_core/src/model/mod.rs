pub mod animation;
pub mod drill;
pub mod layout;
pub mod record;
pub mod types;

pub use animation::*;
pub use drill::*;
pub use layout::*;
pub use record::*;
pub use types::*;
