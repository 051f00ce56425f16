mod admin;
mod ask;
mod page;
mod uploads;

pub use admin::health;
pub use ask::ask;
pub use page::index;
pub use uploads::{serve_upload, upload_video};
