//! Application layer: forms, controllers and services.
//!
//! This layer holds the client-side behaviour of the console. It talks to
//! the service only through the gateway traits in [`crate::domain::gateways`]
//! and to the user only through [`interaction::Notifier`] and
//! [`interaction::Confirmation`].
//!
//! # Modules
//!
//! - [`forms`] - Record, login and signup form models with validation
//! - [`controllers`] - Record list and add/edit dialog controllers
//! - [`services`] - Login, signup and logout
//! - [`routes`] - Screens and the session route guard
//! - [`interaction`] - Notices and confirmation seams

pub mod controllers;
pub mod forms;
pub mod interaction;
pub mod routes;
pub mod services;
