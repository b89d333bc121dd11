//! Operator authentication
//!
//! Gates the back-office routes. Sign-in itself happens elsewhere; this
//! only checks the operator key presented with each request.

pub mod operator_key;

pub use operator_key::{hash_operator_key, operator_middleware, Operator};
