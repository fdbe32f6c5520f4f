pub mod auth;
pub mod components;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod storage;
