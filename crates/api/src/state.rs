use printdesk_core::workflow::JobWorkflow;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store and library sit behind `Arc`s inside the
/// workflow. Server configuration is consumed when the router is built and
/// is not carried here.
#[derive(Clone)]
pub struct AppState {
    /// Job workflow, with access to the job store and file library.
    pub workflow: JobWorkflow,
}
