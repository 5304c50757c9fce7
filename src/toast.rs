use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::trace;

/// Element id of the copy acknowledgment in the page.
pub const TOAST_ELEMENT_ID: &str = "copyToast";
/// Presentation class toggled on the element while visible.
pub const TOAST_VISIBLE_CLASS: &str = "show";
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible,
}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        matches!(self, ToastState::Visible)
    }
}

impl fmt::Display for ToastState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastState::Hidden => write!(f, "hidden"),
            ToastState::Visible => write!(f, "visible"),
        }
    }
}

/// Transient notification that hides itself after a fixed delay.
///
/// Every `flash` schedules its own hide and none is ever cancelled, so with
/// overlapping flashes the earliest pending hide clears the toast even though
/// a later flash asked for more time.
#[derive(Debug, Clone)]
pub struct Toast {
    state: Arc<watch::Sender<ToastState>>,
    duration: Duration,
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        let (tx, _rx) = watch::channel(ToastState::Hidden);
        Self {
            state: Arc::new(tx),
            duration,
        }
    }

    pub fn state(&self) -> ToastState {
        *self.state.borrow()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn subscribe(&self) -> watch::Receiver<ToastState> {
        self.state.subscribe()
    }

    /// Show the toast now and schedule it to hide after `duration`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn flash(&self) {
        self.state.send_replace(ToastState::Visible);
        trace!(delay_ms = self.duration.as_millis() as u64, "Toast shown");

        let state = Arc::clone(&self.state);
        let deadline = Instant::now() + self.duration;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            state.send_replace(ToastState::Hidden);
            trace!("Toast hidden");
        });
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}
