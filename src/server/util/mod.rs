pub mod json;
pub mod like;
pub mod markdown;
pub mod parse;
pub mod process;
pub mod slug;
pub mod validate;
