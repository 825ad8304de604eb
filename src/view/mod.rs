//! Element handles the controller reads and writes and the UI renders.

mod elements;
mod handle;
mod page;

pub use elements::{
    expected_line, CaseList, Counter, FileInput, NavLink, ProgressBar, ResultPanel, Select,
    TestCaseCard, TextInput, UploadButton, UploadResult, COMPLIANCE_LINK, TEST_CASES_LINK,
};
pub use handle::Shared;
pub use page::{Page, PageKind, UploadForm};
