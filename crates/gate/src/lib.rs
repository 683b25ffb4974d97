//! Request authorization gate.
//!
//! Every inbound request is classified by path, its credential validated
//! when the classification calls for it, and a [`Decision`] taken: pass
//! through or redirect, each optionally clearing the credential cookie.
//!
//! - [`Table`] — Fixed protected and auth-only prefix sets
//! - [`Route`] — Classification of a single path
//! - [`Verifier`] — Credential check behind a timeout
//! - [`Gate`] — The decision procedure
//! - [`Guard`] — actix-web middleware applying the gate
mod decision;
mod fault;
mod gate;
mod middleware;
mod route;
mod table;
mod verifier;

pub use decision::*;
pub use fault::*;
pub use gate::*;
pub use middleware::*;
pub use route::*;
pub use table::*;
pub use verifier::*;
