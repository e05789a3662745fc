pub mod element;
pub mod error;
pub mod request;
pub mod result;
pub mod tier;
