//! Mediates between UI events and the backend API.
//!
//! The controller owns no state of its own: everything it shows lives in the
//! element handles of the [`Page`] it was built with, so the same handles can
//! be rendered by egui or inspected by tests.

mod events;

pub use events::{DashboardEvent, EventBindings};

use crate::api::DashboardApi;
use crate::config::DashboardConfig;
use crate::csv_export::{generate_csv, write_csv, CsvQuoting};
use crate::error::DashboardError;
use crate::filter::CaseFilter;
use crate::notify::Severity;
use crate::progress::{SimulatedProgress, PROGRESS_TICK};
use crate::view::{Page, TestCaseCard, UploadResult, COMPLIANCE_LINK, TEST_CASES_LINK};
use derivative::Derivative;
use std::collections::BTreeSet;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// How long the full bar stays up before the result is shown.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(1000);

pub const NO_FILE_MESSAGE: &str = "Please select a file to upload.";
pub const JIRA_MESSAGE: &str =
    "Jira integration will be available in the full version. This is a demo prototype.";
pub const AZURE_MESSAGE: &str =
    "Azure DevOps integration will be available in the full version. This is a demo prototype.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub download_dir: PathBuf,
    pub csv_quoting: CsvQuoting,
    pub completion_delay: Duration,
    pub progress_tick: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("."),
            csv_quoting: CsvQuoting::default(),
            completion_delay: COMPLETION_DELAY,
            progress_tick: PROGRESS_TICK,
        }
    }
}

impl From<&DashboardConfig> for ControllerSettings {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            download_dir: config.download_dir.clone(),
            csv_quoting: config.csv_quoting,
            ..Self::default()
        }
    }
}

/// Which path an upload attempt took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The page has no upload form.
    NoUploadForm,
    NoFileSelected,
    /// The server processed the file.
    Accepted,
    /// The server answered with `success: false`.
    Rejected,
    /// The request did not complete.
    Failed,
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct DashboardController {
    #[derivative(Debug = "ignore")]
    api: Arc<dyn DashboardApi>,
    page: Page,
    settings: ControllerSettings,
}

impl DashboardController {
    pub fn new(api: Arc<dyn DashboardApi>, page: Page, settings: ControllerSettings) -> Self {
        Self {
            api,
            page,
            settings,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Page-ready hook: refreshes the stats, loads the case list when the page
    /// has one and reports which listeners exist.
    pub fn initialize(&self) -> EventBindings {
        self.spawn_refresh();

        if self.page.cases.is_some() {
            let controller = self.clone();
            spawn_detached("test case load", async move {
                if let Err(e) = controller.load_test_cases().await {
                    log::warn!("Test cases not available: {}", e);
                }
            });
        }

        let bindings = EventBindings::for_page(&self.page);
        log::debug!("Attached listeners: {:?}", bindings);
        bindings
    }

    pub async fn handle(&self, event: DashboardEvent) {
        log::debug!("Handling {:?}", event);
        match event {
            DashboardEvent::UploadSubmitted => {
                self.submit_upload().await;
            }
            DashboardEvent::SearchChanged | DashboardEvent::ComplianceChanged => {
                self.filter_visible_cases();
            }
            DashboardEvent::ExportCsv => {
                // already reported to the user
                let _ = self.export_csv().await;
            }
            DashboardEvent::ExportJira => self.export_to_jira(),
            DashboardEvent::ExportAzure => self.export_to_azure(),
            DashboardEvent::ReloadTestCases => {
                if let Err(e) = self.load_test_cases().await {
                    log::warn!("Test cases not available: {}", e);
                }
            }
            DashboardEvent::RefreshStats => self.refresh_dashboard().await,
        }
    }

    /// Fetches both lists concurrently and updates whichever counters exist.
    /// Failures are logged and otherwise ignored.
    pub async fn refresh_dashboard(&self) {
        let total = async {
            match self.api.test_cases().await {
                Ok(cases) => {
                    if let Some(counter) = &self.page.total_test_cases {
                        counter.set(cases.len());
                    }
                }
                Err(e) => log::info!("Dashboard update not available: {}", e),
            }
        };

        let processed = async {
            match self.api.upload_status().await {
                Ok(entries) => {
                    if let Some(counter) = &self.page.files_processed {
                        counter.set(entries.iter().filter(|e| e.processed).count());
                    }
                }
                Err(e) => log::info!("Upload status not available: {}", e),
            }
        };

        tokio::join!(total, processed);
    }

    fn spawn_refresh(&self) {
        let controller = self.clone();
        spawn_detached("dashboard refresh", async move {
            controller.refresh_dashboard().await;
        });
    }

    /// Uploads the selected file while animating the progress bar.
    pub async fn submit_upload(&self) -> UploadOutcome {
        let Some(form) = &self.page.upload_form else {
            log::debug!("Upload requested on a page without an upload form");
            return UploadOutcome::NoUploadForm;
        };

        let Some(file) = form.file_input.selected() else {
            self.notify(NO_FILE_MESSAGE, Severity::Warning);
            return UploadOutcome::NoFileSelected;
        };

        form.button.set_busy();
        form.progress.show();
        form.result.clear();

        let progress = SimulatedProgress::start(form.progress.clone(), self.settings.progress_tick);
        let response = self.api.upload_file(file.clone()).await;
        progress.stop().await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                log::error!("Upload of '{}' failed: {}", file.file_name(), e);
                form.progress.hide();
                form.button.set_idle();
                form.result.show(UploadResult::Failed);
                return UploadOutcome::Failed;
            }
        };

        form.progress.set_percent(100.0);
        tokio::time::sleep(self.settings.completion_delay).await;
        form.progress.hide();
        form.button.set_idle();

        if response.success {
            log::info!(
                "Processed '{}': {} requirements, {} test cases",
                file.file_name(),
                response.requirements_count.unwrap_or_default(),
                response.test_cases_count.unwrap_or_default()
            );
            form.result.show(UploadResult::Success {
                message: response.message.unwrap_or_default(),
                requirements_count: response.requirements_count.unwrap_or_default(),
                test_cases_count: response.test_cases_count.unwrap_or_default(),
                links: vec![TEST_CASES_LINK, COMPLIANCE_LINK],
            });
            form.file_input.clear();
            self.spawn_refresh();
            UploadOutcome::Accepted
        } else {
            let error = response.error.unwrap_or_default();
            log::warn!("Server rejected '{}': {}", file.file_name(), error);
            form.result.show(UploadResult::Rejected { error });
            UploadOutcome::Rejected
        }
    }

    /// Fetches the case list, renders one card per case and reapplies the
    /// current filter. Returns the number of cards.
    pub async fn load_test_cases(&self) -> Result<usize, DashboardError> {
        let Some(list) = &self.page.cases else {
            return Ok(0);
        };

        let cases = self.api.test_cases().await?;

        if let Some(select) = &self.page.compliance_filter {
            let tags: BTreeSet<String> = cases
                .iter()
                .flat_map(|c| c.compliance_tags.iter().cloned())
                .collect();
            select.set_options(tags.into_iter().collect());
        }

        let count = cases.len();
        list.replace(cases.into_iter().map(TestCaseCard::from_case).collect());
        self.filter_visible_cases();
        Ok(count)
    }

    /// Shows the cards matching the search text and compliance filter and
    /// hides the rest. Returns how many are visible.
    pub fn filter_visible_cases(&self) -> usize {
        let Some(list) = &self.page.cases else {
            return 0;
        };

        let search = self
            .page
            .search_input
            .as_ref()
            .map(|input| input.value())
            .unwrap_or_default();
        let compliance = self
            .page
            .compliance_filter
            .as_ref()
            .map(|select| select.value())
            .unwrap_or_default();

        let filter = CaseFilter::new(&search, &compliance);
        list.apply_visibility(|card| filter.matches(&card.text, &card.compliance))
    }

    /// Writes the full case list to the download directory as CSV.
    pub async fn export_csv(&self) -> Result<PathBuf, DashboardError> {
        let exported = async {
            let cases = self.api.test_cases().await?;
            let content = generate_csv(&cases, self.settings.csv_quoting);
            let path = write_csv(&self.settings.download_dir, &content).await?;
            Ok::<_, DashboardError>((path, cases.len()))
        }
        .await;

        match exported {
            Ok((path, rows)) => {
                log::info!("Exported {} test cases to {}", rows, path.display());
                self.notify(
                    format!("Exported {} test cases to {}", rows, path.display()),
                    Severity::Success,
                );
                Ok(path)
            }
            Err(e) => {
                log::error!("CSV export failed: {}", e);
                self.notify("Could not export test cases to CSV.", Severity::Danger);
                Err(e)
            }
        }
    }

    pub fn export_to_jira(&self) {
        self.notify(JIRA_MESSAGE, Severity::Info);
    }

    pub fn export_to_azure(&self) {
        self.notify(AZURE_MESSAGE, Severity::Info);
    }

    /// Shows a banner, or only logs it when the page has no notification area.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        match &self.page.notifications {
            Some(area) => {
                area.push(message, severity);
            }
            None => log::warn!("{:?}: {}", severity, message),
        }
    }

    pub fn log_activity(&self, message: impl Into<String>) {
        if let Some(activity) = &self.page.recent_activity {
            activity.push(message);
        }
    }
}

fn spawn_detached<F>(what: &str, task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(runtime) => {
            runtime.spawn(task);
        }
        Err(_) => log::warn!("No runtime available, skipping {}", what),
    }
}
