//! weather-widget library crate
//!
//! A presentation-layer widget which fetches the current user's weather
//! conditions through the host CMS's REST service proxy and renders a small
//! icon-plus-temperature fragment into a host-supplied container.
//!
//! The host integration layer constructs a [`proxy::ServiceProxy`], wraps it
//! in a [`conditions_service::Gateway`], and calls
//! [`widget::initialize_all()`] with the containers present on the page.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod condition;
pub mod conditions_service;
pub mod icons;
pub mod proxy;
pub mod render;
pub mod widget;
