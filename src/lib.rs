pub mod cache;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod marketplace;
pub mod paths;
pub mod recommend;
pub mod team;

// Re-export commonly used types
pub use catalog::{Catalog, Complexity, Template};
pub use config::Config;
pub use generator::GenerationReport;
pub use recommend::{SkillLevel, UserProfile};
