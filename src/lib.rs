pub mod alignment;
pub mod api;
pub mod comparison;
pub mod config;
pub mod distance;
pub mod error;
pub mod result;
pub mod scorer;
pub mod stats;
pub mod tokenizer;
// cmd and reports belong to the binary (see main.rs).

pub use comparison::{ComparisonEngine, ComparisonResult};
pub use error::{EchoScoreError, EsResult};
pub use result::PracticeResult;
