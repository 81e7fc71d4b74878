//! Document adapters: rendering, filenames, and local export storage.

mod filename;
mod local_file_storage;
mod markdown_renderer;

pub use filename::export_filename;
pub use local_file_storage::LocalFileStorage;
pub use markdown_renderer::MarkdownRenderer;
