//! Personal portfolio site: a server-rendered resume page plus the small text and
//! visibility effects it uses (typing reveal, scroll reveal, term highlighting).

pub mod config;
pub mod content;
pub mod effects;
pub mod errors;
pub mod highlight;
pub mod render;
pub mod routes;
pub mod state;
pub mod theme;
