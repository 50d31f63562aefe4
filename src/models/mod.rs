pub mod case;

pub use case::{Case, CaseStatus, CaseType};
