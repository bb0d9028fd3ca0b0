//! DocuSign provider plug-in for generic OAuth 2.0 client engines—endpoint URLs, scopes,
//! Basic-auth headers, response validation, and the resource-owner model, with every flow,
//! exchange, and transport concern left to the engine that hosts it.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured events from response validation (`warn!` on provider
//!   error statuses, `debug!` on accepted responses).

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod provider;
pub mod user;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Formatter, Result as FmtResult},
	};

	pub use oauth2::AccessToken;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
pub use url;
