//! Independent examples of iterator pipelines, closures as single-method
//! traits, value-typed dates and fork/join parallelism.
//!
//! No module depends on another except through [`joining`], which several
//! use to format lists.

pub mod arrays;
pub mod behaviour;
pub mod books;
pub mod datetime;
pub mod encoding;
pub mod error;
pub mod fibonacci;
pub mod joining;
pub mod lazy_log;
pub mod music;
pub mod overflow;
pub mod parallel;
pub mod words;

pub use error::{BookError, DateTimeError, EncodingError, LoanError, OverflowError, ParallelError};
pub use joining::{Joining, StringCombiner};
