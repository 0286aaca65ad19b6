use iced::task::Handle;

use super::model::ToastMessage;

/// Visible message plus the single pending hide slot.
#[derive(Default)]
pub(crate) struct ToastState {
    message: Option<ToastMessage>,
    generation: u64,
    latest_request: u64,
    pending_hide: Option<Handle>,
}

impl ToastState {
    /// Message on screen, `None` while hidden.
    pub(crate) fn message(&self) -> Option<&ToastMessage> {
        self.message.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub(crate) fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Allocate the id of a new copy request.
    pub(crate) fn next_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.latest_request
    }

    /// Whether `request` is the newest copy handed out.
    pub(crate) fn is_latest_request(&self, request: u64) -> bool {
        request == self.latest_request
    }

    /// Replace the visible message, cancel the pending hide and return the
    /// generation the next hide must carry.
    pub(crate) fn show(&mut self, message: ToastMessage) -> u64 {
        self.cancel_pending_hide();
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message);
        self.generation
    }

    pub(crate) fn set_pending_hide(&mut self, handle: Handle) {
        self.cancel_pending_hide();
        self.pending_hide = Some(handle);
    }

    /// Hide the message if `generation` is still the latest one shown.
    pub(crate) fn hide_if_current(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }

        self.pending_hide = None;
        self.message = None;
        true
    }

    pub(crate) fn dismiss(&mut self) {
        self.cancel_pending_hide();
        self.message = None;
    }

    #[cfg(test)]
    pub(crate) fn has_pending_hide(&self) -> bool {
        self.pending_hide.is_some()
    }

    fn cancel_pending_hide(&mut self) {
        if let Some(handle) = self.pending_hide.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_shown_message_when_shown_again_then_generation_advances() {
        let mut state = ToastState::default();

        let first = state.show(ToastMessage::copied("#111111"));
        let second = state.show(ToastMessage::copied("#222222"));

        assert_eq!(second, first + 1);
        assert_eq!(
            state.message().map(ToastMessage::text),
            Some("Copied #222222")
        );
    }

    #[test]
    fn given_stale_generation_when_hide_then_message_stays() {
        let mut state = ToastState::default();
        let stale = state.show(ToastMessage::copied("#111111"));
        state.show(ToastMessage::blocked());

        assert!(!state.hide_if_current(stale));
        assert!(state.message().is_some());
    }

    #[test]
    fn given_current_generation_when_hide_then_message_disappears() {
        let mut state = ToastState::default();
        let current = state.show(ToastMessage::blocked());

        assert!(state.hide_if_current(current));
        assert!(state.message().is_none());
    }

    #[test]
    fn given_two_requests_when_checking_then_only_newest_is_latest() {
        let mut state = ToastState::default();

        let first = state.next_request();
        let second = state.next_request();

        assert!(second > first);
        assert!(!state.is_latest_request(first));
        assert!(state.is_latest_request(second));
        assert_eq!(state.latest_request(), second);
    }

    #[test]
    fn given_visible_message_when_dismissed_then_it_is_hidden() {
        let mut state = ToastState::default();
        let shown = state.show(ToastMessage::copied("#111111"));

        state.dismiss();

        assert!(state.message().is_none());
        assert_eq!(state.generation(), shown);
    }
}
