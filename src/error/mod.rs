mod app_error;
mod status;

pub use app_error::{AppError, AppResult};
pub use status::RequestStatus;
