mod activation;
mod item_set;
mod list;
mod subscription;

pub use activation::*;
pub use item_set::*;
pub use list::*;
pub use subscription::*;
