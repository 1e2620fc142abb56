pub mod enter;
pub mod home;
pub mod profile;
pub mod upload;
