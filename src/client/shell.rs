use rand::Rng;
use std::time::Duration;
use tokio::time::Instant;

/// Whether the shell is still showing the splash screen
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShellState {
    Loading,
    Loaded,
}

/// The shell's two-state machine. It starts in [ShellState::Loading] and
/// latches to [ShellState::Loaded] the first time the main application reports
/// that it finished initializing. There is no transition back.
pub struct Shell {
    state: ShellState,
}

impl Shell {
    pub fn new() -> Shell {
        Shell {
            state: ShellState::Loading,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Callback handed to the main application. Returns true only on the call
    /// that performed the loading→loaded transition.
    pub fn mark_loaded(&mut self) -> bool {
        if self.state == ShellState::Loaded {
            return false;
        }

        self.state = ShellState::Loaded;
        true
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

/// Fallback delay baked into the advisory itself when nothing configures it
pub const DEFAULT_ADVISORY_DELAY: Duration = Duration::from_secs(8);
/// Delay the splash screen actually arms the advisory with
pub const SPLASH_ADVISORY_DELAY: Duration = Duration::from_secs(5);
/// One frame of the advisory's ellipsis animation
pub const DOT_FRAME_INTERVAL: Duration = Duration::from_millis(500);

/// The delayed "server waking up" notice shown over the splash screen. Purely
/// cosmetic: it becomes visible a fixed delay after arming and can be
/// dismissed, neither of which affects the loading state itself.
pub struct ServerWakeAdvisory {
    armed_at: Instant,
    show_after: Duration,
    dismissed: bool,
}

impl ServerWakeAdvisory {
    pub fn new(show_after: Duration) -> ServerWakeAdvisory {
        ServerWakeAdvisory {
            armed_at: Instant::now(),
            show_after,
            dismissed: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.dismissed && self.armed_at.elapsed() >= self.show_after
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Current frame of the ellipsis animation, cycling "" → "." → ".." → "..."
    /// every [DOT_FRAME_INTERVAL] while the advisory is visible
    pub fn dot_frame(&self) -> &'static str {
        const FRAMES: [&str; 4] = ["", ".", "..", "..."];
        if !self.is_visible() {
            return "";
        }

        let visible_for = self.armed_at.elapsed() - self.show_after;
        let frame = (visible_for.as_millis() / DOT_FRAME_INTERVAL.as_millis()) as usize;
        FRAMES[frame % FRAMES.len()]
    }
}

/// Status lines shown under the progress bar, one per 20% band
pub const STATUS_MESSAGES: [&str; 5] = [
    "Initializing your workspace",
    "Loading user preferences",
    "Syncing your tasks",
    "Preparing the interface",
    "Almost ready!",
];

/// Headline messages cycled on the splash screen
pub const LOADING_MESSAGES: [&str; 5] = [
    "Setting up your tasks...",
    "Organizing your workflow...",
    "Preparing your dashboard...",
    "Loading your productivity tools...",
    "Synchronizing your data...",
];

/// How long each headline message stays up before cycling
pub const LOADING_MESSAGE_INTERVAL: Duration = Duration::from_secs(4);

/// Headline message for the given time since the splash screen appeared
pub fn loading_message_frame(elapsed: Duration) -> &'static str {
    let frame = (elapsed.as_millis() / LOADING_MESSAGE_INTERVAL.as_millis()) as usize;
    LOADING_MESSAGES[frame % LOADING_MESSAGES.len()]
}

/// Motivational quotes shown on the splash screen
pub const QUOTES: [&str; 8] = [
    "Success is the sum of small efforts repeated day in and day out.",
    "The secret of getting ahead is getting started.",
    "Productivity is never an accident. It's the result of commitment to excellence.",
    "Focus on being productive instead of busy.",
    "Your future is created by what you do today, not tomorrow.",
    "A goal without a timeline is just a dream.",
    "Progress, not perfection, is the goal.",
    "The best time to plant a tree was 20 years ago. The second best time is now.",
];

/// Quote shown under the splash screen's progress area. Picked at random once
/// when the splash screen appears and held for the rest of the session.
pub struct SessionQuote {
    quote: &'static str,
}

impl SessionQuote {
    pub fn pick(rng: &mut impl Rng) -> SessionQuote {
        SessionQuote {
            quote: QUOTES[rng.gen_range(0..QUOTES.len())],
        }
    }

    pub fn quote(&self) -> &'static str {
        self.quote
    }
}

/// Cosmetic progress meter driven by a timer while the real application
/// initializes. Climbs by random increments and parks at 98% so it never
/// claims completion on its own.
pub struct ProgressSim {
    percent: f64,
}

/// Where the simulated progress bar stops climbing
pub const PROGRESS_CEILING: f64 = 98.0;

impl ProgressSim {
    pub fn new() -> ProgressSim {
        ProgressSim { percent: 0.0 }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// One timer tick: advance by a random step between 2 and 10 percent,
    /// capped at [PROGRESS_CEILING]
    pub fn tick(&mut self, rng: &mut impl Rng) {
        let increment = rng.gen_range(2.0..10.0);
        self.percent = (self.percent + increment).min(PROGRESS_CEILING);
    }

    /// Status line for the current progress band
    pub fn status_message(&self) -> &'static str {
        let band = ((self.percent / 20.0) as usize).min(STATUS_MESSAGES.len() - 1);
        STATUS_MESSAGES[band]
    }
}

impl Default for ProgressSim {
    fn default() -> Self {
        Self::new()
    }
}
