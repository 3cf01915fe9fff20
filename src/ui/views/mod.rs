pub mod game;
pub mod home;
pub mod lessons;
pub mod quiz;
pub mod settings;
