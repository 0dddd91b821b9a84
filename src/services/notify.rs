use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    Failed(String),
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Added => f.write_str("Vendor added!"),
            Notice::Updated => f.write_str("Vendor updated!"),
            Notice::Deleted => f.write_str("Vendor deleted!"),
            Notice::Failed(message) => f.write_str(message),
        }
    }
}

/// Where success and failure messages go for display.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Sends notices to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        if notice.is_failure() {
            error!(notice = %notice, "Notification");
        } else {
            info!(notice = %notice, "Notification");
        }
    }
}

/// Keeps every notice; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
