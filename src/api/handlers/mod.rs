pub mod health;
pub mod influencers;
pub mod metrics;
pub mod pages;
pub mod settings;
pub mod theme;
