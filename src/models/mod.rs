mod item;
mod order;

pub use item::*;
pub use order::*;
