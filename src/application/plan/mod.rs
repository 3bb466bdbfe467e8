//! Plan use case and its options/result types

mod options;
mod result;
mod use_case;

pub use options::PlanOptions;
pub use result::PlanResult;
pub use use_case::PlanUseCase;
