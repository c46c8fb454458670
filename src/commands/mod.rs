pub mod cache;
pub mod doctor;
pub mod info;
pub mod list;
pub mod market;
pub mod new;
pub mod profile;
pub mod recommend;
pub mod team;
pub mod version;
