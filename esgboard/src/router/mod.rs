pub mod esg;
pub mod leaderboard;
pub mod macros;
pub mod news;
pub mod table;

pub mod util;
