use crate::notify::Severity;
use eframe::egui::Color32;

/// Accent used for the progress bar and tag chips.
pub const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);

pub trait ColorExt {
    fn parse_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }
}

/// Banner and result colors, in the palette of the web dashboard.
pub fn severity_color(severity: Severity) -> Color32 {
    let hex = match severity {
        Severity::Success => "#198754",
        Severity::Info => "#0dcaf0",
        Severity::Warning => "#ffc107",
        Severity::Danger => "#dc3545",
    };
    Color32::parse_hex(hex).unwrap_or(Color32::GRAY)
}
