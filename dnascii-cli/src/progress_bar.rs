use std::sync::{Arc, Mutex};
use std::time::Duration;

use dnascii::progress::{ByteNum, ProgressNotifier};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

#[derive(Debug)]
struct DecodeProgressBarState {
    total: u64,
    initialized: bool,
}

impl DecodeProgressBarState {
    fn new() -> Self {
        Self {
            total: 0,
            initialized: false,
        }
    }
}

/// A byte-count progress bar fed by the FASTA reader.
#[derive(Debug, Clone)]
pub(crate) struct DecodeProgressBar {
    bar: ProgressBar,
    state: Arc<Mutex<DecodeProgressBarState>>,
}

impl DecodeProgressBar {
    pub fn new() -> DecodeProgressBar {
        let init_bar = ProgressBar::hidden();
        init_bar.set_style(ProgressStyle::default_spinner());
        init_bar.enable_steady_tick(Duration::from_millis(50));
        init_bar.set_message("Reading sequence...");

        Self {
            bar: init_bar,
            state: Arc::new(Mutex::new(DecodeProgressBarState::new())),
        }
    }

    pub fn show(&self) {
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    pub fn println(&self, msg: String) {
        self.bar.println(msg);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear()
    }

    pub fn set_total_bytes(&self, total: u64) {
        let mut state = self.state.lock().unwrap();
        state.total = total;
    }

    #[inline]
    fn init(&self) {
        let mut state = self.state.lock().unwrap();
        if state.initialized {
            return;
        }

        if state.total == 0 {
            self.bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {bytes}/? ({bytes_per_sec})")
                    .expect("Invalid progress bar template"),
            );
        } else {
            self.bar.set_length(state.total);
            self.bar.set_style(
                ProgressStyle::default_bar()
                    .template("{wide_bar} {bytes}/{total_bytes} [ETA {eta}]")
                    .expect("Invalid progress bar template"),
            );
        }
        self.bar.set_position(0);

        state.initialized = true;
    }
}

impl ProgressNotifier for DecodeProgressBar {
    fn processed_bytes(&self, bytes: ByteNum) {
        self.init();
        self.bar.inc(bytes.get() as u64);
    }
}
