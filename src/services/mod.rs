pub mod dialogue;
pub mod recorder;
pub mod sessions;
