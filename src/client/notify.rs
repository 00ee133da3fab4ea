//! Transient user notifications.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}

/// Surface that shows toast-style notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Notifier that keeps every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.entries.iter().filter(|n| n.level == level).count()
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!("{}", notification.text),
            NotificationLevel::Error => tracing::warn!("{}", notification.text),
        }
        self.entries.push(notification);
    }
}
