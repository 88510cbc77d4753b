//! Script composition from the template bank.
//!
//! - `generator`: title, hook, introduction, conclusion
//! - `formatter`: calls-to-action, image prompts, master prompt
//! - `remodeler`: thematic blocks
//!
//! Every function takes an already resolved [`Language`](crate::Language)
//! and an injected random source.

pub mod formatter;
pub mod generator;
pub mod remodeler;

pub use formatter::{
    generate_cta, generate_image_prompt, generate_master_prompt, generate_mini_cta, Mood,
};
pub use generator::{generate_conclusion, generate_hook, generate_introduction, generate_title};
pub use remodeler::remodel_block;
