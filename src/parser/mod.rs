pub mod catalog;
pub mod locale;
pub mod overrides;

pub use catalog::*;
pub use locale::*;
pub use overrides::*;
