pub mod configs;
pub mod player;
pub mod view;
