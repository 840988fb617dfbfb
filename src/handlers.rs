pub mod health;
pub mod outlook;
pub mod regions;
pub mod scenarios;
pub mod segments;
