pub mod contact;
pub mod events;
pub mod geosites;
pub mod health;
pub mod media;
pub mod news;
pub mod park_services;
