#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Task, Theme};

use crate::config::ConfigData;
use crate::fonts::FontsConfig;
use crate::theme::ThemeManager;
use crate::widgets::Widgets;
use crate::widgets::palette::{PaletteEffect, PaletteEvent, PaletteWidget};
use crate::widgets::picker::{PickerEffect, PickerEvent, PickerWidget};
use crate::widgets::toast::{ToastEffect, ToastEvent, ToastWidget};

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Picker widget
    PickerUi(PickerEvent),
    PickerEffect(PickerEffect),
    // Palette widget
    PaletteUi(PaletteEvent),
    PaletteEffect(PaletteEffect),
    // Toast widget
    ToastUi(ToastEvent),
    ToastEffect(ToastEffect),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(config: &ConfigData) -> (Self, Task<AppEvent>) {
        let app = Self::with_widgets(Widgets {
            picker: PickerWidget::new(config.initial_color().to_string()),
            palette: PaletteWidget::new(),
            toast: ToastWidget::new(),
        });

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Build the app around a custom clipboard without scheduling startup.
    #[cfg(test)]
    pub(crate) fn with_clipboard(
        config: &ConfigData,
        clipboard: crate::widgets::toast::services::SharedClipboard,
    ) -> Self {
        Self::with_widgets(Widgets {
            picker: PickerWidget::new(config.initial_color().to_string()),
            palette: PaletteWidget::new(),
            toast: ToastWidget::with_clipboard(clipboard),
        })
    }

    fn with_widgets(widgets: Widgets) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!("Tinter - {}", self.widgets.palette.vm().title)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
