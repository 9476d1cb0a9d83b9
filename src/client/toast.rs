use std::time::Duration;

/// How long every toast stays on screen, regardless of severity
pub const TOAST_DURATION: Duration = Duration::from_millis(3500);

/// Classification of a toast. Severity only selects the color scheme; timing
/// and dismissal behavior are identical across all of them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
    Purple,
}

/// Color scheme for one severity
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ToastStyle {
    pub background: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

impl Severity {
    pub fn style(&self) -> ToastStyle {
        match self {
            Severity::Success => ToastStyle {
                background: "#ecfdf5",
                accent: "#10b981",
                text: "#065f46",
            },
            Severity::Error => ToastStyle {
                background: "#fef2f2",
                accent: "#ef4444",
                text: "#991b1b",
            },
            Severity::Warning => ToastStyle {
                background: "#fffbeb",
                accent: "#f59e0b",
                text: "#92400e",
            },
            Severity::Info => ToastStyle {
                background: "#eff6ff",
                accent: "#3b82f6",
                text: "#1e40af",
            },
            Severity::Purple => ToastStyle {
                background: "#f5f3ff",
                accent: "#8b5cf6",
                text: "#5b21b6",
            },
        }
    }
}

/// A fully-resolved toast, ready for a sink to display
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ToastPresentation {
    pub message: String,
    pub style: ToastStyle,
    pub duration: Duration,
}

/// Something that can put a toast in front of the user
pub trait ToastSink {
    fn show(&mut self, toast: ToastPresentation);
}

/// Resolves a message and severity into a presentation and hands it to the
/// sink. Makes exactly one presentation call per invocation.
pub fn toaster(sink: &mut impl ToastSink, message: &str, severity: Severity) {
    sink.show(ToastPresentation {
        message: message.to_owned(),
        style: severity.style(),
        duration: TOAST_DURATION,
    });
}

/// Sink that reports toasts through the log stream. Used where no interactive
/// surface exists, such as operational tooling.
#[derive(Default)]
pub struct TracingSink;

impl ToastSink for TracingSink {
    fn show(&mut self, toast: ToastPresentation) {
        tracing::info!(accent = toast.style.accent, "Toast: {}", toast.message);
    }
}
