pub mod assemble;
pub mod document;
pub mod error;
pub mod infer;
pub mod manifest;
pub mod route;

pub use assemble::{EndpointConfig, generate};
pub use document::Document;
