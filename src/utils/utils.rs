use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use crate::config::config::parse_log_level;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    env_logger::Builder::new()
        .filter_level(parse_log_level(log_level))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

/// 操作者看到的終端輸出，可複製並在背景轉換中共用
#[derive(Clone)]
pub struct ConsoleOutput {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl ConsoleOutput {
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        ConsoleOutput {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// 不換行輸出，用於提示字串
    pub fn print(&self, text: &str) -> io::Result<()> {
        let mut sink = self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sink.write_all(text.as_bytes())?;
        sink.flush()
    }

    pub fn println(&self, line: &str) -> io::Result<()> {
        let mut sink = self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.flush()
    }
}

/// 等待背景轉換時的進度指示，非終端環境下自動隱藏
pub struct WaitSpinner {
    pb: ProgressBar,
}

impl WaitSpinner {
    pub fn new(pending: usize) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("等待 {} 個背景轉換完成", pending));
        pb.enable_steady_tick(Duration::from_millis(120));
        WaitSpinner { pb }
    }

    pub fn update(&self, remaining: usize) {
        self.pb.set_message(format!("等待 {} 個背景轉換完成", remaining));
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
