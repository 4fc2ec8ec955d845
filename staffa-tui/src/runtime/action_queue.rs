use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Deferred async work queued by the (synchronous) key handlers and run by
/// the event loop between draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    LoadEmployees,
    SubmitEmployeeForm,
    LoadOnboarding,
    AdvanceTaskStatus,
    SubmitTaskForm,
    LoadPto,
    SubmitPtoForm,
    LoadWorkflows,
    SubmitWorkflowForm,
    LoadDashboard,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
