pub use self::tickets::*;
pub use self::visitors::*;

mod tickets;
mod visitors;
