//! The slice builder: action creators, a reducer and selectors from one descriptor.

mod builder;
mod error;

pub use builder::{create_slice, Slice, SliceBuilder, SliceDescriptor};
pub use error::SliceError;
