pub mod patch;
pub mod stamp;

pub use patch::Patcher;
pub use stamp::RunStamp;
