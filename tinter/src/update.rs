use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => routers::picker::apply_initial_input(app),
        // Picker widget
        AppEvent::PickerUi(event) => routers::picker::route_event(app, event),
        AppEvent::PickerEffect(effect) => {
            routers::picker::route_effect(app, effect)
        },
        // Palette widget
        AppEvent::PaletteUi(event) => {
            routers::palette::route_event(app, event)
        },
        AppEvent::PaletteEffect(effect) => {
            routers::palette::route_effect(app, effect)
        },
        // Toast widget
        AppEvent::ToastUi(event) => routers::toast::route_event(app, event),
        AppEvent::ToastEffect(effect) => {
            routers::toast::route_effect(app, effect)
        },
    }
}
