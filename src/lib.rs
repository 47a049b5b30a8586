// Library exports for integration tests and the server binary
pub mod components;
pub mod config;
pub mod html;
pub mod i18n;
pub mod identity;
pub mod pages;
pub mod security;
pub mod server;
pub mod template;
