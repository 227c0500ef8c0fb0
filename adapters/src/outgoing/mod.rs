pub mod fs_store;
pub mod image_rs;
pub mod tokio_spawn;
