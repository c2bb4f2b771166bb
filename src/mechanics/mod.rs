pub mod efficiency;

pub use efficiency::*;
