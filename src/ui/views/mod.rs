pub mod assistant;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod practice_setup;
pub mod quiz;
pub mod sources;
pub mod summary;
pub mod system_detail;
pub mod systems;
