use super::GenesisDashboard;
use crate::activity::ActivityLog;
use crate::api::SelectedFile;
use crate::controller::DashboardEvent;
use crate::notify::Severity;
use crate::utils::color::{severity_color, ACCENT};
use crate::view::{
    expected_line, CaseList, Counter, Page, PageKind, Select, TextInput, UploadForm, UploadResult,
};
use eframe::egui::{self, Align, Color32, RichText, Stroke};
use rfd::FileDialog;

impl GenesisDashboard {
    pub fn render(&mut self, ctx: &egui::Context) {
        let mut selected = self.active;
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Genesis QA");
                ui.add_space(20.0);
                for kind in PageKind::ALL {
                    ui.selectable_value(&mut selected, kind, kind.title());
                }
            });
            ui.add_space(4.0);
        });

        if selected != self.active {
            self.active = selected;
            self.on_tab_opened(selected);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let footer_height = 30.0;
            let content_height = ui.available_height() - footer_height;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    self.render_notifications(ui);

                    if let Some(screen) = self.screen(self.active) {
                        let kind = screen.kind;
                        let page = screen.page().clone();
                        self.render_page(ui, kind, &page);
                    }

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(6.0);
                self.render_footer(ui);
            });
        });
    }

    fn render_notifications(&self, ui: &mut egui::Ui) {
        let mut dismissed = Vec::new();

        for notification in self.notifications.current() {
            let color = severity_color(notification.severity);
            egui::Frame::none()
                .fill(color.gamma_multiply(0.15))
                .stroke(Stroke::new(1.0, color))
                .inner_margin(8.0)
                .rounding(4.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(&notification.message);
                        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                            if ui.small_button("✖").clicked() {
                                dismissed.push(notification.id);
                            }
                        });
                    });
                });
            ui.add_space(4.0);
        }

        for id in dismissed {
            self.notifications.dismiss(id);
        }
    }

    fn render_page(&self, ui: &mut egui::Ui, kind: PageKind, page: &Page) {
        ui.add_space(10.0);

        if page.total_test_cases.is_some() || page.files_processed.is_some() {
            ui.horizontal(|ui| {
                if let Some(counter) = &page.total_test_cases {
                    stat_card(ui, "Total Test Cases", counter);
                }
                if let Some(counter) = &page.files_processed {
                    stat_card(ui, "Files Processed", counter);
                }
                if ui.button("🔄 Refresh").clicked() {
                    self.dispatch(kind, DashboardEvent::RefreshStats);
                }
            });
            ui.add_space(20.0);
        }

        if let Some(form) = &page.upload_form {
            self.render_upload_form(ui, kind, form);
            ui.add_space(20.0);
        }

        if let Some(cases) = &page.cases {
            self.render_case_toolbar(
                ui,
                kind,
                page.search_input.as_ref(),
                page.compliance_filter.as_ref(),
            );
            ui.add_space(10.0);
            render_cards(ui, cases);
        }

        if let Some(activity) = &page.recent_activity {
            ui.add_space(20.0);
            render_activity(ui, activity);
        }
    }

    fn render_upload_form(&self, ui: &mut egui::Ui, kind: PageKind, form: &UploadForm) {
        ui.group(|ui| {
            ui.label(RichText::new("Upload requirements document").strong());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("📄 Select File").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Text documents", &["txt"])
                        .pick_file()
                    {
                        form.file_input.select(SelectedFile::new(path));
                    }
                }
                match form.file_input.selected() {
                    Some(file) => ui.label(format!("Selected: {}", file.file_name())),
                    None => ui.label("No file selected"),
                };
            });

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                let button =
                    egui::Button::new(form.button.label()).min_size(egui::vec2(200.0, 40.0));
                if ui.add_enabled(form.button.is_enabled(), button).clicked() {
                    self.dispatch(kind, DashboardEvent::UploadSubmitted);
                }
            });

            if form.progress.is_visible() {
                ui.add_space(10.0);
                let progress_bar = egui::ProgressBar::new(form.progress.percent() / 100.0)
                    .show_percentage()
                    .animate(false)
                    .fill(ACCENT);
                ui.add(progress_bar);
            }

            if let Some(result) = form.result.content() {
                ui.add_space(10.0);
                self.render_upload_result(ui, &result);
            }
        });
    }

    fn render_upload_result(&self, ui: &mut egui::Ui, result: &UploadResult) {
        let color = if result.is_success() {
            severity_color(Severity::Success)
        } else {
            severity_color(Severity::Danger)
        };

        egui::Frame::none()
            .stroke(Stroke::new(1.0, color))
            .inner_margin(10.0)
            .rounding(4.0)
            .show(ui, |ui| {
                ui.colored_label(color, RichText::new(result.title()).strong());
                match result {
                    UploadResult::Success {
                        message,
                        requirements_count,
                        test_cases_count,
                        links,
                    } => {
                        ui.label(message);
                        ui.label(format!("• Requirements extracted: {}", requirements_count));
                        ui.label(format!("• Test cases generated: {}", test_cases_count));
                        ui.add_space(6.0);
                        ui.horizontal(|ui| {
                            for link in links {
                                if ui.button(link.label).clicked() {
                                    self.open_link(*link);
                                }
                            }
                        });
                    }
                    UploadResult::Rejected { error } => {
                        ui.label(error);
                    }
                    UploadResult::Failed => {
                        ui.label(UploadResult::FAILED_MESSAGE);
                    }
                }
            });
    }

    fn render_case_toolbar(
        &self,
        ui: &mut egui::Ui,
        kind: PageKind,
        search: Option<&TextInput>,
        compliance: Option<&Select>,
    ) {
        ui.horizontal(|ui| {
            if let Some(search) = search {
                let mut text = search.value();
                let edit = egui::TextEdit::singleline(&mut text)
                    .hint_text("Search test cases...")
                    .desired_width(240.0);
                if ui.add(edit).changed() {
                    search.set(text);
                    self.dispatch(kind, DashboardEvent::SearchChanged);
                }
            }

            if let Some(compliance) = compliance {
                let current = compliance.value();
                let mut chosen = current.clone();
                let label = if chosen.is_empty() {
                    "All standards".to_string()
                } else {
                    chosen.clone()
                };

                egui::ComboBox::from_id_source("filterCompliance")
                    .selected_text(label)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut chosen, String::new(), "All standards");
                        for option in compliance.options() {
                            ui.selectable_value(&mut chosen, option.clone(), option);
                        }
                    });

                if chosen != current {
                    compliance.set_value(chosen);
                    self.dispatch(kind, DashboardEvent::ComplianceChanged);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Azure DevOps").clicked() {
                    self.dispatch(kind, DashboardEvent::ExportAzure);
                }
                if ui.button("Jira").clicked() {
                    self.dispatch(kind, DashboardEvent::ExportJira);
                }
                if ui.button("⬇ Export CSV").clicked() {
                    self.dispatch(kind, DashboardEvent::ExportCsv);
                }
                if ui.button("🔄 Reload").clicked() {
                    self.dispatch(kind, DashboardEvent::ReloadTestCases);
                }
            });
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.label(
                RichText::new(format!("Backend: {}", self.server_url))
                    .small()
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });
    }
}

fn stat_card(ui: &mut egui::Ui, title: &str, counter: &Counter) {
    ui.group(|ui| {
        ui.set_min_width(160.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).color(ui.visuals().text_color().gamma_multiply(0.7)));
            ui.heading(counter.display_text());
        });
    });
}

fn render_cards(ui: &mut egui::Ui, cases: &CaseList) {
    let cards = cases.cards();
    let shown: Vec<_> = cards.iter().filter(|card| card.visible).collect();

    ui.label(format!("Showing {} of {} test cases", shown.len(), cards.len()));
    ui.add_space(6.0);

    for card in shown {
        let case = &card.case;
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.strong(&case.id);
                ui.label(&case.title);
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(&case.priority).color(priority_color(&case.priority)));
                });
            });
            ui.label(&case.description);
            for step in &case.steps {
                ui.label(RichText::new(step).small());
            }
            ui.label(RichText::new(expected_line(case)).italics());
            ui.horizontal_wrapped(|ui| {
                for tag in &case.compliance_tags {
                    ui.label(RichText::new(tag).small().color(ACCENT));
                }
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(&case.created_date).small());
                });
            });
        });
        ui.add_space(4.0);
    }
}

fn priority_color(priority: &str) -> Color32 {
    match priority {
        "High" => severity_color(Severity::Danger),
        "Medium" => severity_color(Severity::Warning),
        _ => severity_color(Severity::Info),
    }
}

fn render_activity(ui: &mut egui::Ui, activity: &ActivityLog) {
    ui.group(|ui| {
        ui.label(RichText::new("Recent Activity").strong());
        let entries = activity.entries();
        if entries.is_empty() {
            ui.label("No recent activity");
        }
        for entry in entries {
            ui.horizontal(|ui| {
                ui.colored_label(severity_color(Severity::Info), "ℹ");
                ui.label(entry);
            });
        }
    });
}
