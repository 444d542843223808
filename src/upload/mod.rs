pub mod parser;
pub mod store;

pub use store::UploadStore;
