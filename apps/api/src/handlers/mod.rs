pub mod access;
pub mod health;
pub mod navigation;
pub mod roles;
