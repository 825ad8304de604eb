mod state;
mod ui;

use crate::api::{DashboardApi, HttpApi};
use crate::config::DashboardConfig;
use crate::controller::{ControllerSettings, DashboardEvent};
use crate::error::DashboardError;
use crate::notify::NotificationArea;
use crate::view::{NavLink, PageKind};
use eframe::{egui, App};
use reqwest::Url;
pub use state::Screen;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Tasks update element handles in the background, so the window repaints on
/// a timer as well as on input.
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct GenesisDashboard {
    runtime: Runtime,
    server_url: Url,
    notifications: NotificationArea,
    screens: Vec<Screen>,
    active: PageKind,
}

impl GenesisDashboard {
    pub fn new(config: &DashboardConfig) -> Result<Self, DashboardError> {
        log::info!("Initializing Genesis QA dashboard");
        let runtime = Runtime::new().map_err(DashboardError::Runtime)?;

        let http = HttpApi::new(&config.server_url)?;
        let server_url = http.base_url().clone();
        let api: Arc<dyn DashboardApi> = Arc::new(http);

        let notifications = NotificationArea::default();
        let settings = ControllerSettings::from(config);

        let screens = {
            let _guard = runtime.enter();
            PageKind::ALL
                .iter()
                .map(|&kind| {
                    Screen::new(kind, api.clone(), notifications.clone(), settings.clone())
                })
                .collect()
        };

        log::info!("Using backend at {}", server_url);
        Ok(Self {
            runtime,
            server_url,
            notifications,
            screens,
            active: config.start_page,
        })
    }

    fn screen(&self, kind: PageKind) -> Option<&Screen> {
        self.screens.iter().find(|s| s.kind == kind)
    }

    /// Hands an event to the controller of `kind`, provided that page has a
    /// listener for it.
    pub fn dispatch(&self, kind: PageKind, event: DashboardEvent) {
        let Some(screen) = self.screen(kind) else {
            return;
        };

        if !screen.bindings.accepts(event) {
            log::debug!("No listener for {:?} on {:?}", event, kind);
            return;
        }

        let controller = screen.controller.clone();
        self.runtime.spawn(async move {
            controller.handle(event).await;
        });
    }

    /// Pages reload their data when opened, like a fresh page load.
    fn on_tab_opened(&self, kind: PageKind) {
        match kind {
            PageKind::Dashboard => self.dispatch(kind, DashboardEvent::RefreshStats),
            PageKind::Upload => {}
            PageKind::TestCases => self.dispatch(kind, DashboardEvent::ReloadTestCases),
        }
    }

    fn link_url(&self, link: NavLink) -> String {
        match self.server_url.join(link.path.trim_start_matches('/')) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.server_url, link.path),
        }
    }

    fn open_link(&self, link: NavLink) {
        let url = self.link_url(link);
        log::info!("Opening {}", url);
        if let Err(e) = open::that(&url) {
            log::warn!("Could not open {}: {}", url, e);
        }
    }
}

impl App for GenesisDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(REPAINT_INTERVAL);
        self.render(ctx);
    }
}
