//! Request handlers

pub mod actors;
pub mod biographies;
pub mod genres;
pub mod health;
pub mod movies;
