// Resume assembly: matching results → tailored Resume → markdown document.

pub mod generator;
pub mod handlers;
pub mod markdown;
pub mod prompts;
