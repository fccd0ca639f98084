pub mod aggregate;
pub mod codec;
