/// Analysis services
pub mod analysis;
pub mod processor;

pub use analysis::{analyze_user, split_name, AnalysisError, EmailClassifier};
pub use processor::UserProcessor;
