use super::handle::Shared;
use crate::api::{SelectedFile, TestCase};

/// A numeric stat such as `totalTestCases`. Empty until the first refresh.
#[derive(Debug, Clone, Default)]
pub struct Counter(Shared<Option<usize>>);

impl Counter {
    pub fn set(&self, value: usize) {
        self.0.set(Some(value));
    }

    pub fn value(&self) -> Option<usize> {
        self.0.get()
    }

    pub fn display_text(&self) -> String {
        self.value()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// `fileInput`: the single document picked for upload.
#[derive(Debug, Clone, Default)]
pub struct FileInput(Shared<Option<SelectedFile>>);

impl FileInput {
    pub fn select(&self, file: SelectedFile) {
        self.0.set(Some(file));
    }

    pub fn selected(&self) -> Option<SelectedFile> {
        self.0.get()
    }

    pub fn clear(&self) {
        self.0.set(None);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlState {
    #[default]
    Idle,
    Busy,
}

/// `uploadBtn`
#[derive(Debug, Clone, Default)]
pub struct UploadButton(Shared<ControlState>);

impl UploadButton {
    pub fn set_busy(&self) {
        self.0.set(ControlState::Busy);
    }

    pub fn set_idle(&self) {
        self.0.set(ControlState::Idle);
    }

    pub fn state(&self) -> ControlState {
        self.0.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.state() == ControlState::Idle
    }

    pub fn label(&self) -> &'static str {
        match self.state() {
            ControlState::Idle => "📤 Upload & Process",
            ControlState::Busy => "⏳ Processing...",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressState {
    pub visible: bool,
    pub percent: f32,
}

/// `uploadProgress` and its `.progress-bar`.
#[derive(Debug, Clone, Default)]
pub struct ProgressBar(Shared<ProgressState>);

impl ProgressBar {
    pub fn show(&self) {
        self.0.update(|p| p.visible = true);
    }

    pub fn hide(&self) {
        self.0.update(|p| p.visible = false);
    }

    pub fn is_visible(&self) -> bool {
        self.0.with(|p| p.visible)
    }

    pub fn set_percent(&self, percent: f32) {
        self.0.update(|p| p.percent = percent.clamp(0.0, 100.0));
    }

    pub fn percent(&self) -> f32 {
        self.0.with(|p| p.percent)
    }
}

/// A link rendered below a successful upload, relative to the server url.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const TEST_CASES_LINK: NavLink = NavLink {
    label: "View Test Cases",
    path: "/test_cases",
};

pub const COMPLIANCE_LINK: NavLink = NavLink {
    label: "View Compliance Report",
    path: "/compliance",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    Success {
        message: String,
        requirements_count: u64,
        test_cases_count: u64,
        links: Vec<NavLink>,
    },
    /// The server answered with `success: false`.
    Rejected { error: String },
    /// The request never completed.
    Failed,
}

impl UploadResult {
    pub const FAILED_MESSAGE: &'static str =
        "An error occurred while processing your file. Please try again.";

    pub fn title(&self) -> &'static str {
        match self {
            Self::Success { .. } => "Success!",
            Self::Rejected { .. } => "Error",
            Self::Failed => "Upload Failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// `uploadResult`
#[derive(Debug, Clone, Default)]
pub struct ResultPanel(Shared<Option<UploadResult>>);

impl ResultPanel {
    pub fn show(&self, result: UploadResult) {
        self.0.set(Some(result));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn content(&self) -> Option<UploadResult> {
        self.0.get()
    }
}

/// `searchInput`
#[derive(Debug, Clone, Default)]
pub struct TextInput(Shared<String>);

impl TextInput {
    pub fn set(&self, value: impl Into<String>) {
        self.0.set(value.into());
    }

    pub fn value(&self) -> String {
        self.0.get()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectState {
    pub value: String,
    pub options: Vec<String>,
}

/// `filterCompliance`: an empty value means "all".
#[derive(Debug, Clone, Default)]
pub struct Select(Shared<SelectState>);

impl Select {
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        self.0.update(|s| s.value = value);
    }

    pub fn value(&self) -> String {
        self.0.with(|s| s.value.clone())
    }

    pub fn set_options(&self, options: Vec<String>) {
        self.0.update(|s| s.options = options);
    }

    pub fn options(&self) -> Vec<String> {
        self.0.with(|s| s.options.clone())
    }
}

/// A `.test-case-card`: the rendered text searched by the filter plus its
/// `data-compliance` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseCard {
    pub case: TestCase,
    pub text: String,
    pub compliance: String,
    pub visible: bool,
}

impl TestCaseCard {
    pub fn new(text: impl Into<String>, compliance: impl Into<String>) -> Self {
        Self::with_case(placeholder_case(), text, compliance)
    }

    pub fn with_case(
        case: TestCase,
        text: impl Into<String>,
        compliance: impl Into<String>,
    ) -> Self {
        Self {
            case,
            text: text.into(),
            compliance: compliance.into(),
            visible: true,
        }
    }

    pub fn from_case(case: TestCase) -> Self {
        let text = render_card_text(&case);
        let compliance = case.compliance_tags.join(",");
        Self::with_case(case, text, compliance)
    }
}

fn placeholder_case() -> TestCase {
    TestCase {
        id: String::new(),
        title: String::new(),
        description: String::new(),
        priority: String::new(),
        expected_result: String::new(),
        compliance_tags: Vec::new(),
        created_date: String::new(),
        steps: Vec::new(),
        requirement_id: None,
    }
}

/// The expected-result line exactly as the card draws it.
pub fn expected_line(case: &TestCase) -> String {
    format!("Expected: {}", case.expected_result)
}

/// Every line a card draws, in display order: id, title, priority,
/// description, steps, expected result, one line per tag, created date.
pub fn card_lines(case: &TestCase) -> Vec<String> {
    let mut lines = vec![
        case.id.clone(),
        case.title.clone(),
        case.priority.clone(),
        case.description.clone(),
    ];
    lines.extend(case.steps.iter().cloned());
    lines.push(expected_line(case));
    lines.extend(case.compliance_tags.iter().cloned());
    lines.push(case.created_date.clone());
    lines
}

pub fn render_card_text(case: &TestCase) -> String {
    card_lines(case).join("\n")
}

/// The container of `.test-case-card` elements.
#[derive(Debug, Clone, Default)]
pub struct CaseList(Shared<Vec<TestCaseCard>>);

impl CaseList {
    pub fn replace(&self, cards: Vec<TestCaseCard>) {
        self.0.set(cards);
    }

    pub fn cards(&self) -> Vec<TestCaseCard> {
        self.0.get()
    }

    pub fn len(&self) -> usize {
        self.0.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recomputes every card's visibility; returns how many are shown.
    pub fn apply_visibility(&self, mut is_visible: impl FnMut(&TestCaseCard) -> bool) -> usize {
        self.0.update(|cards| {
            let mut shown = 0;
            for card in cards.iter_mut() {
                card.visible = is_visible(card);
                if card.visible {
                    shown += 1;
                }
            }
            shown
        })
    }

    pub fn visible_texts(&self) -> Vec<String> {
        self.0.with(|cards| {
            cards
                .iter()
                .filter(|c| c.visible)
                .map(|c| c.text.clone())
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let bar = ProgressBar::default();
        bar.set_percent(140.0);
        assert_eq!(bar.percent(), 100.0);
        bar.set_percent(-3.0);
        assert_eq!(bar.percent(), 0.0);
    }

    #[test]
    fn button_label_follows_state() {
        let button = UploadButton::default();
        assert!(button.is_enabled());
        button.set_busy();
        assert!(!button.is_enabled());
        assert_eq!(button.label(), "⏳ Processing...");
    }

    #[test]
    fn card_from_case_carries_tags_as_attribute() {
        let case = TestCase {
            id: "TC-002".into(),
            title: "Test Case for REQ-004".into(),
            description: "Ensure that patient records are encrypted".into(),
            priority: "High".into(),
            expected_result: "System should comply with REQ-004".into(),
            compliance_tags: vec!["HIPAA".into(), "FDA-21CFR".into()],
            created_date: "2024-05-01 10:00:00".into(),
            steps: vec![],
            requirement_id: None,
        };
        let card = TestCaseCard::from_case(case);
        assert_eq!(card.compliance, "HIPAA,FDA-21CFR");
        assert!(card.text.contains("patient records"));
        assert!(card.text.contains("High"));
        assert!(card.visible);
    }

    #[test]
    fn card_text_holds_only_what_the_card_draws() {
        let case = TestCase {
            id: "TC-1".into(),
            title: "Checkout".into(),
            description: "Pay with a saved card".into(),
            priority: "High".into(),
            expected_result: "Payment accepted".into(),
            compliance_tags: vec!["PCI-DSS".into(), "GDPR".into()],
            created_date: "2024-05-01".into(),
            steps: vec!["Open cart".into()],
            requirement_id: None,
        };
        let card = TestCaseCard::from_case(case.clone());

        assert!(!card.text.to_lowercase().contains("priority"));
        assert_eq!(card.text.lines().collect::<Vec<_>>(), card_lines(&case));
        assert!(card.text.lines().any(|line| line == "PCI-DSS"));
        assert!(card.text.contains(&expected_line(&case)));
    }
}
