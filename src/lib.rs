pub mod api;
pub mod catches;
pub mod competitions;
pub mod db;
pub mod invitations;
pub mod leaderboard;
pub mod participants;
pub mod photos;
pub mod users;
