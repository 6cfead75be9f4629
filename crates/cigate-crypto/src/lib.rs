//! Crypto module.

mod errors;
mod sig;
mod uri;

pub use self::{
    errors::{CryptoError, Result},
    sig::Signature,
    uri::encode_uri,
};
