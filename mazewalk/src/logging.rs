use std::{
    io,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock},
    time::{Duration, Instant},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    // default configuration
    const DEFAULT_DECAY: Duration = Duration::from_secs(5);
    const DEFAULT_MAX_VISIBLE: usize = 1;

    LOGGER.get_or_init(|| AppLogger::new(log::Level::Info, DEFAULT_DECAY, DEFAULT_MAX_VISIBLE))
}

/// Installs [`AppLogger`] as the global logger, keeping messages at `level` and above.
pub fn init(level: log::Level) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: log::Level,
    pub pushed: Instant,
    pub message: String,
    pub source: String,
}

impl Message {
    fn line(&self) -> String {
        format!("[{}] {} -> {}", self.level, self.source, self.message)
    }
}

#[derive(Default)]
struct Logs {
    logs: [Vec<Message>; 5], // there are 5 levels
    // everything pushed, oldest first, until it's flushed
    history: Vec<Message>,
}

impl Logs {
    fn push(&mut self, message: Message) {
        self.history.push(message.clone());
        self.logs[message.level as usize - 1].insert(0, message);
    }

    fn clear_old(&mut self, decay: Duration, now: Instant) {
        for level in self.logs.iter_mut() {
            level.retain(|msg| now.duration_since(msg.pushed) < decay);
        }
    }
}

pub struct LogsIter<'a> {
    logs: MutexGuard<'a, Logs>,
    level: usize,
    index: usize,
}

impl<'a> Iterator for LogsIter<'a> {
    type Item = Message;

    fn next(&mut self) -> Option<Self::Item> {
        while self.level < self.logs.logs.len() && self.index >= self.logs.logs[self.level].len() {
            self.level += 1;
            self.index = 0;
        }
        if self.level >= self.logs.logs.len() {
            return None;
        }

        let log = self.logs.logs[self.level][self.index].clone();
        self.index += 1;
        Some(log)
    }
}

/// Logger keeping recent messages in memory, so they can be shown on the status line while the
/// terminal is in raw mode and written out once it's restored.
pub struct AppLogger {
    min_level: Arc<RwLock<log::Level>>,
    pub decay: Duration,
    pub max_visible: usize,
    logs: Arc<Mutex<Logs>>,
}

impl AppLogger {
    fn new(min_level: log::Level, decay: Duration, max_visible: usize) -> Self {
        Self {
            min_level: Arc::new(RwLock::new(min_level)),
            decay,
            max_visible,
            logs: Arc::new(Mutex::new(Logs::default())),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    fn borrow_mut_logs(&self) -> MutexGuard<Logs> {
        // a thread panicking while pushing a message leaves the logs usable
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Messages younger than the decay window, most severe first, newest first within a level.
    pub fn get_logs(&self) -> impl Iterator<Item = Message> + '_ {
        let mut logs = self.borrow_mut_logs();
        logs.clear_old(self.decay, Instant::now());

        LogsIter {
            logs,
            level: 0,
            index: 0,
        }
    }

    /// Status line made of up to `max_visible` most important recent messages.
    pub fn status_line(&self) -> Option<String> {
        let line = self
            .get_logs()
            .take(self.max_visible)
            .map(|msg| msg.line())
            .collect::<Vec<_>>()
            .join(" | ");

        (!line.is_empty()).then_some(line)
    }

    /// Writes every message logged since the last call into `out`, oldest first.
    pub fn write_history(&self, out: &mut impl io::Write) -> io::Result<()> {
        let history = std::mem::take(&mut self.borrow_mut_logs().history);
        for msg in history {
            writeln!(out, "{}", msg.line())?;
        }
        Ok(())
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.borrow_mut_logs().push(Message {
                level: record.level(),
                pushed: Instant::now(),
                message: record.args().to_string(),
                source: record.module_path().unwrap_or("unknown").to_string(),
            });
        }
    }

    fn flush(&self) {
        let _ = self.write_history(&mut io::stderr().lock());
    }
}
