//! Transient, dismissible banners shown at the top of the window.

use crate::view::Shared;
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long a banner stays up unless dismissed first.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug)]
struct Banner {
    notification: Notification,
    expiry: Option<JoinHandle<()>>,
}

#[derive(Debug, Default)]
struct AreaState {
    next_id: u64,
    // newest first
    banners: Vec<Banner>,
}

impl AreaState {
    fn take(&mut self, id: u64) -> Option<Banner> {
        let index = self
            .banners
            .iter()
            .position(|b| b.notification.id == id)?;
        Some(self.banners.remove(index))
    }
}

/// The notification container. Banners stack without deduplication.
#[derive(Debug, Clone)]
pub struct NotificationArea {
    state: Shared<AreaState>,
    ttl: Duration,
}

impl Default for NotificationArea {
    fn default() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }
}

impl NotificationArea {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            state: Shared::default(),
            ttl,
        }
    }

    /// Inserts a banner on top and schedules its removal.
    ///
    /// Outside a Tokio runtime the banner is kept until dismissed.
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.state.update(|state| {
            state.next_id += 1;
            let notification = Notification {
                id: state.next_id,
                message: message.into(),
                severity,
            };
            state.banners.insert(
                0,
                Banner {
                    notification,
                    expiry: None,
                },
            );
            state.next_id
        });

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::warn!("No runtime available, notification {} will not expire", id);
            return id;
        };

        let area = self.clone();
        let ttl = self.ttl;
        let expiry = runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            if area.state.update(|state| state.take(id)).is_some() {
                log::debug!("Notification {} expired", id);
            }
        });

        self.state.update(|state| {
            if let Some(banner) = state.banners.iter_mut().find(|b| b.notification.id == id) {
                banner.expiry = Some(expiry);
            }
        });

        id
    }

    /// Removes a banner before it expires and cancels its pending removal.
    /// Returns false when the banner is already gone.
    pub fn dismiss(&self, id: u64) -> bool {
        match self.state.update(|state| state.take(id)) {
            Some(banner) => {
                if let Some(expiry) = banner.expiry {
                    expiry.abort();
                }
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Vec<Notification> {
        self.state.with(|state| {
            state
                .banners
                .iter()
                .map(|b| b.notification.clone())
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.state.with(|state| state.banners.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of banners that still have a removal scheduled.
    pub fn pending_expiries(&self) -> usize {
        self.state.with(|state| {
            state
                .banners
                .iter()
                .filter(|b| b.expiry.as_ref().is_some_and(|e| !e.is_finished()))
                .count()
        })
    }
}
