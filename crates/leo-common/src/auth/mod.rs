//! Access-token handling for sessions issued by the hosted auth service

mod token;

pub use token::{Claims, TokenVerifier, AUTHENTICATED_AUDIENCE};
