pub mod digest;
pub mod middleware;
pub mod nonce;
