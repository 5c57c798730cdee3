pub mod long;
pub mod short;

pub use long::output_long;
pub use short::output_short;
