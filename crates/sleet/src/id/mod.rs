mod interface;
mod multi;
mod single;

pub use interface::*;
pub use multi::*;
pub use single::*;
