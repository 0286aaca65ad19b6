use iced::Task;

use super::command::ToastCommand;
use super::event::ToastEffect;
use super::model::{TOAST_DURATION, ToastMessage};
use super::services::ClipboardWriter;
use super::state::ToastState;

/// Reduce a toast command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut ToastState,
    writer: &ClipboardWriter,
    command: ToastCommand,
) -> Task<ToastEffect> {
    match command {
        ToastCommand::Notify { text } => {
            let request = state.next_request();
            request_copy(writer, request, text)
        },
        ToastCommand::ClipboardWritten { request, text } => {
            if state.is_latest_request(request) {
                show(state, ToastMessage::copied(&text))
            } else {
                log::debug!("ignoring stale copy {request} of {text}");
                Task::none()
            }
        },
        ToastCommand::ClipboardFailed {
            request,
            text,
            reason,
        } => {
            log::warn!("copying {text} failed: {reason}");
            if state.is_latest_request(request) {
                show(state, ToastMessage::blocked())
            } else {
                Task::none()
            }
        },
        ToastCommand::ClipboardSuperseded { request } => {
            log::debug!("copy {request} superseded by a newer one");
            Task::none()
        },
        ToastCommand::HideElapsed { generation } => {
            if !state.hide_if_current(generation) {
                log::debug!("ignoring stale toast hide {generation}");
            }
            Task::none()
        },
        ToastCommand::Dismiss => {
            state.dismiss();
            Task::none()
        },
    }
}

/// Write on the blocking pool so a slow clipboard never stalls the
/// runtime.
fn request_copy(
    writer: &ClipboardWriter,
    request: u64,
    text: String,
) -> Task<ToastEffect> {
    let writer = writer.clone();
    Task::perform(
        async move {
            let fallback = text.clone();
            tokio::task::spawn_blocking(move || writer.write(request, text))
                .await
                .unwrap_or_else(|err| ToastEffect::ClipboardFailed {
                    request,
                    text: fallback,
                    reason: err.to_string(),
                })
        },
        |effect| effect,
    )
}

/// Show `message` and schedule its hide, replacing any pending one.
fn show(state: &mut ToastState, message: ToastMessage) -> Task<ToastEffect> {
    let generation = state.show(message);
    let (task, handle) = Task::perform(
        async move {
            tokio::time::sleep(TOAST_DURATION).await;
            generation
        },
        |generation| ToastEffect::HideElapsed { generation },
    )
    .abortable();
    state.set_pending_hide(handle);
    task
}
