pub mod crawler;
pub mod hotels;
pub mod web;
