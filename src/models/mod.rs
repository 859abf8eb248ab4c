pub mod member;
pub mod messages;
pub mod stats;
