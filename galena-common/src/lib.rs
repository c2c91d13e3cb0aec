mod bits;
mod shared;

pub use bits::BitIndex;
pub use shared::Shared;
