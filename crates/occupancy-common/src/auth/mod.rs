//! Chat credential loading

mod token;

pub use token::{read_token_file, CredentialError};
