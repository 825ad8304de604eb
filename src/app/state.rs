use crate::api::DashboardApi;
use crate::controller::{ControllerSettings, DashboardController, EventBindings};
use crate::notify::NotificationArea;
use crate::view::{Page, PageKind};
use std::sync::Arc;

/// One tab: its elements, the controller driving them and the listeners
/// that were attached when it was initialized.
#[derive(Debug, Clone)]
pub struct Screen {
    pub kind: PageKind,
    pub controller: DashboardController,
    pub bindings: EventBindings,
}

impl Screen {
    /// Must run inside a Tokio runtime context so the initial refresh can be
    /// spawned.
    pub fn new(
        kind: PageKind,
        api: Arc<dyn DashboardApi>,
        notifications: NotificationArea,
        settings: ControllerSettings,
    ) -> Self {
        let page = Page::for_kind(kind, notifications);
        let controller = DashboardController::new(api, page, settings);
        let bindings = controller.initialize();
        Self {
            kind,
            controller,
            bindings,
        }
    }

    pub fn page(&self) -> &Page {
        self.controller.page()
    }
}
