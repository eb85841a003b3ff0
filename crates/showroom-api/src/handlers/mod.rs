//! HTTP request handlers.

pub mod activate;
pub mod admin;
pub mod health;
pub mod pages;
pub mod share;
pub mod track;
