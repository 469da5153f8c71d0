pub mod random;
pub mod util;
