mod files;
mod health;

#[cfg(test)]
pub use files::GREETING;
pub use files::{download_file, hello, list_files, upload_file};
pub use health::health;
