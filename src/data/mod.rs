pub mod contest;
pub mod export;
pub mod import;
pub mod player;
pub mod validate;
