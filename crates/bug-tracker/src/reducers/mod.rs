pub mod app_reducer;
pub mod bugs_reducer;

pub use app_reducer::reduce;
