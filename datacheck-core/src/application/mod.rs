// datacheck-core/src/application/mod.rs

pub mod notification;
pub mod report;
pub mod validation;

pub mod pipeline;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Le CLI fait `use datacheck_core::application::{run_pipeline, Validator};`
// sans connaître la structure interne des fichiers.

pub use notification::{NotifyError, notify};
pub use pipeline::{DeliveryStatus, PipelineContext, RunResult, run_pipeline};
pub use report::render;
pub use validation::Validator;
