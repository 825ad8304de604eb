use super::elements::{
    CaseList, Counter, FileInput, ProgressBar, ResultPanel, Select, TextInput, UploadButton,
};
use crate::activity::ActivityLog;
use crate::notify::NotificationArea;
use clap::ValueEnum;

/// `uploadForm` and the elements it drives. They only exist together.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub file_input: FileInput,
    pub button: UploadButton,
    pub progress: ProgressBar,
    pub result: ResultPanel,
}

/// The elements a page exposes to the controller. Any of them may be
/// missing; operations skip what is absent.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub upload_form: Option<UploadForm>,
    pub search_input: Option<TextInput>,
    pub compliance_filter: Option<Select>,
    pub cases: Option<CaseList>,
    pub total_test_cases: Option<Counter>,
    pub files_processed: Option<Counter>,
    pub recent_activity: Option<ActivityLog>,
    pub notifications: Option<NotificationArea>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PageKind {
    Dashboard,
    Upload,
    TestCases,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Dashboard, PageKind::Upload, PageKind::TestCases];

    pub fn title(self) -> &'static str {
        match self {
            PageKind::Dashboard => "📊 Dashboard",
            PageKind::Upload => "📤 Upload",
            PageKind::TestCases => "📋 Test Cases",
        }
    }
}

impl Page {
    /// Builds the element set of one tab. All tabs share `notifications`.
    pub fn for_kind(kind: PageKind, notifications: NotificationArea) -> Self {
        let mut page = Page {
            notifications: Some(notifications),
            ..Page::default()
        };

        match kind {
            PageKind::Dashboard => {
                page.total_test_cases = Some(Counter::default());
                page.files_processed = Some(Counter::default());
                page.recent_activity = Some(ActivityLog::default());
                page.upload_form = Some(UploadForm::default());
            }
            PageKind::Upload => {
                page.upload_form = Some(UploadForm::default());
            }
            PageKind::TestCases => {
                page.search_input = Some(TextInput::default());
                page.compliance_filter = Some(Select::default());
                page.cases = Some(CaseList::default());
            }
        }

        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_share_the_notification_area() {
        let area = NotificationArea::default();
        let dashboard = Page::for_kind(PageKind::Dashboard, area.clone());
        let cases = Page::for_kind(PageKind::TestCases, area.clone());

        dashboard
            .notifications
            .as_ref()
            .unwrap()
            .push("hello", crate::notify::Severity::Info);
        assert_eq!(cases.notifications.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_cases_page_has_no_upload_form() {
        let page = Page::for_kind(PageKind::TestCases, NotificationArea::default());
        assert!(page.upload_form.is_none());
        assert!(page.cases.is_some());
        assert!(page.total_test_cases.is_none());
    }
}
