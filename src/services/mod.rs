pub mod batch;
pub mod naming;
pub mod processing;

pub use batch::{run_batch, BatchReport};
pub use processing::{PreviewTarget, ProcessOutcome, ProcessRequest, ProcessingService};
