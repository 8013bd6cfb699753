use std::fmt;

/// Long-running work the worker thread is doing for the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusyTask {
    Loading,
    Classifying,
}

impl fmt::Display for BusyTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading screenshot"),
            Self::Classifying => write!(f, "Classifying"),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// File name or "pasted" for the open screenshot.
    pub source_label: Option<String>,

    /// What the worker is busy with (None = idle).
    pub running: Option<BusyTask>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Progress.
    pub progress_rows_done: Option<usize>,
    pub progress_rows_total: Option<usize>,

    pub show_about: bool,
    pub show_paste_dialog: bool,
    pub paste_buffer: String,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn begin(&mut self, task: BusyTask) {
        self.running = Some(task);
        self.progress_rows_done = None;
        self.progress_rows_total = None;
    }

    pub fn finish(&mut self) {
        self.running = None;
        self.progress_rows_done = None;
        self.progress_rows_total = None;
    }
}
