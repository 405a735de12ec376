use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

use crate::markup::{el, Element};

/// Toasts kept for inspection after they leave the screen.
const HISTORY_LIMIT: usize = 256;

/// Types of notifications
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn background(&self) -> &'static str {
        match self {
            Self::Error => "#ef4444",
            Self::Success => "#22c55e",
            Self::Info => "#4285f4",
        }
    }
}

/// Represents a notification
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Fixed top-right position; concurrent toasts overlap.
    pub fn render(&self) -> Element {
        el("div")
            .class(format!("toast toast-{}", self.kind))
            .attr("data-toast-id", self.id.to_string())
            .style(format!(
                "position: fixed; top: 20px; right: 20px; padding: 12px 16px; \
                 background-color: {}; color: white; border-radius: 8px; z-index: 10000; \
                 font-size: 14px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);",
                self.kind.background()
            ))
            .text(self.message.clone())
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: ToastKind) -> Uuid;
}

#[derive(Debug, Default)]
struct ToastQueue {
    live: Vec<Toast>,
    history: VecDeque<Toast>,
}

/// In-memory toast stack with auto-dismissal.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    ttl: Duration,
    queue: Arc<Mutex<ToastQueue>>,
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl ToastNotifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            queue: Arc::new(Mutex::new(ToastQueue::default())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ToastQueue> {
        match self.queue.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Toasts still on screen, oldest first. Expired toasts are dismissed here.
    pub fn active(&self) -> Vec<Toast> {
        let now = Instant::now();
        let mut queue = self.lock();
        queue.live.retain(|t| !t.is_expired(now));
        queue.live.clone()
    }

    /// Every toast raised so far (bounded), oldest first.
    pub fn history(&self) -> Vec<Toast> {
        self.lock().history.iter().cloned().collect()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.lock().history.iter().filter(|t| t.kind == kind).count()
    }

    pub fn messages(&self, kind: ToastKind) -> Vec<String> {
        self.lock()
            .history
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.message.clone())
            .collect()
    }

    pub fn dismiss(&self, id: Uuid) {
        self.lock().live.retain(|t| t.id != id);
    }

    /// Renders the toasts currently on screen.
    pub fn render(&self) -> Vec<Element> {
        self.active().iter().map(Toast::render).collect()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: ToastKind) -> Uuid {
        match kind {
            ToastKind::Error => error!(toast = %message, "error toast"),
            _ => info!(toast = %message, kind = %kind, "toast"),
        }

        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.to_string(),
            kind,
            created_at: Utc::now(),
            expires_at: Instant::now() + self.ttl,
        };
        let id = toast.id;

        let mut queue = self.lock();
        queue.live.push(toast.clone());
        queue.history.push_back(toast);
        while queue.history.len() > HISTORY_LIMIT {
            queue.history.pop_front();
        }
        id
    }
}
