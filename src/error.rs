/// Errors surfaced by the capture API.
///
/// Buffer operations and filtering are pure in-memory logic, so the only
/// failure mode is argument validation at the call boundary.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CaptureError {
    #[error("logger category must be a non-empty string")]
    EmptyCategory,
}
