/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

mod auth;
pub mod client;
pub mod errors;
mod macros;
mod parsers;
pub mod photos;
pub mod properties;
pub mod request;
pub mod response;

pub use client::*;
pub use errors::*;
pub use photos::*;
pub use properties::*;
pub use request::*;
pub use response::*;
