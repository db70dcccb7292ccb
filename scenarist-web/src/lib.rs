//! Scenarist Web
//!
//! Server-rendered yew pages for the Scenarist site. Every page is a
//! function component with owned props, rendered to a string by
//! [`render::render_page`]; there is no client-side hydration.
#![forbid(unsafe_code)]

pub mod components;
pub mod i18n;
pub mod pages;
pub mod render;
pub mod routes;

pub use render::{SITE_CSS, STYLESHEET_PATH, document, render_page, render_static_page};
pub use routes::Route;
