pub mod prompts;
mod writer;

pub use writer::{GeneratedContent, ResumeWriter};
