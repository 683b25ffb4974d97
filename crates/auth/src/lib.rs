//! Credentials, passwords, and account registration.
//!
//! A credential is a stateless HS256 JWT carrying the account's identity and
//! role. Nothing about a signed-in user is stored server-side; validity is a
//! function of the signature and the expiry alone.
//!
//! ## Identity Types
//!
//! - [`Role`] — Account type, athlete or promoter
//! - [`Identity`] — The four identity fields a credential is issued for
//! - [`Member`] — A registered account
//! - [`Directory`] — Account store seam, with the in-memory [`Memory`]
//!
//! ## Credentials
//!
//! - [`Crypto`] — Issue and validate signed credentials
//! - [`Claims`] — JWT payload structure
//! - [`Validity`] — Typed outcome of validation
//! - [`password`] — Argon2 hashing and strength scoring
mod claims;
mod crypto;
mod directory;
mod dto;
mod error;
mod identity;
mod member;
pub mod password;
mod registration;
mod role;
mod validity;

pub use claims::*;
pub use crypto::*;
pub use directory::*;
pub use dto::*;
pub use error::*;
pub use identity::*;
pub use member::*;
pub use registration::*;
pub use role::*;
pub use validity::*;

#[cfg(feature = "server")]
pub mod cookie;
#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
