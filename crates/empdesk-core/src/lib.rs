#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod auth;
pub mod constants;
pub mod controller;
pub mod forms;
pub mod session;
pub mod transport;
pub mod view;

pub use crate::api::*;
pub use crate::auth::*;
pub use crate::constants::*;
pub use crate::controller::*;
pub use crate::forms::*;
pub use crate::session::*;
pub use crate::transport::*;
pub use crate::view::*;
