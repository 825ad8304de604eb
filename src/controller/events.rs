use crate::view::Page;

/// User actions the front end forwards to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    UploadSubmitted,
    SearchChanged,
    ComplianceChanged,
    ExportCsv,
    ExportJira,
    ExportAzure,
    ReloadTestCases,
    RefreshStats,
}

/// Which listeners `initialize` attached. The listener-backed events are
/// only bound when their element exists on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventBindings {
    pub upload_form: bool,
    pub search_input: bool,
    pub compliance_filter: bool,
}

impl EventBindings {
    pub fn for_page(page: &Page) -> Self {
        Self {
            upload_form: page.upload_form.is_some(),
            search_input: page.search_input.is_some(),
            compliance_filter: page.compliance_filter.is_some(),
        }
    }

    pub fn accepts(&self, event: DashboardEvent) -> bool {
        match event {
            DashboardEvent::UploadSubmitted => self.upload_form,
            DashboardEvent::SearchChanged => self.search_input,
            DashboardEvent::ComplianceChanged => self.compliance_filter,
            DashboardEvent::ExportCsv
            | DashboardEvent::ExportJira
            | DashboardEvent::ExportAzure
            | DashboardEvent::ReloadTestCases
            | DashboardEvent::RefreshStats => true,
        }
    }
}
