pub mod esg;
pub mod news;
