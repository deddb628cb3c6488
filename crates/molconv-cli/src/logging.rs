use crate::error::{CliError, Result};
use crate::ui::UiEvent;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, MakeWriter},
    prelude::*,
};

/// Hands formatted log lines to the UI so they print above the progress bars.
#[derive(Clone)]
pub struct UiLogMakeWriter {
    sender: mpsc::Sender<UiEvent>,
}

impl UiLogMakeWriter {
    pub fn new(sender: mpsc::Sender<UiEvent>) -> Self {
        Self { sender }
    }
}

impl<'a> MakeWriter<'a> for UiLogMakeWriter {
    type Writer = UiLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        UiLogWriter {
            sender: self.sender.clone(),
            buffer: Vec::new(),
        }
    }
}

/// Buffers one event and sends it when dropped. Falls back to stderr once the
/// UI is gone or its queue is full.
pub struct UiLogWriter {
    sender: mpsc::Sender<UiEvent>,
    buffer: Vec<u8>,
}

impl Write for UiLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for UiLogWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer)
            .trim_end_matches('\n')
            .to_string();
        if let Err(e) = self.sender.try_send(UiEvent::Log(line)) {
            if let UiEvent::Log(line) = e.into_inner() {
                eprintln!("{}", line);
            }
        }
    }
}

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

pub fn setup_logging(
    verbosity: u8,
    quiet: bool,
    log_file: Option<PathBuf>,
    ui_sender: mpsc::Sender<UiEvent>,
) -> Result<()> {
    let filter = level_filter(verbosity, quiet);

    let stderr_layer = fmt::layer()
        .with_writer(UiLogMakeWriter::new(ui_sender))
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    let result = if let Some(path) = log_file {
        let file = File::create(&path).map_err(CliError::Io)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_target(true);

        subscriber.with(file_layer).try_init()
    } else {
        subscriber.try_init()
    };

    result.map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use std::thread;
    use std::time::Duration;
    use tracing::{debug, error, info, trace, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            let (sender, _receiver) = mpsc::channel(16);
            setup_logging(3, false, None, sender).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    fn verbosity_maps_to_increasing_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(3, false), LevelFilter::TRACE);
        assert_eq!(level_filter(9, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_keeps_only_errors() {
        assert_eq!(level_filter(0, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn initialization_and_macros_work() {
        ensure_global_logger_is_set();

        error!("This is an error");
        warn!("This is a warning");
        info!("Renaming chain AB to B");
        debug!("This is debug");
        trace!("This is trace");
    }

    #[test]
    #[serial]
    fn file_logging_can_be_added_to_global_logger() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("test.log");

        let file = File::create(log_path.clone()).unwrap();
        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            info!("Renaming chain {} to {}", "LONG", "L");
        });

        thread::sleep(Duration::from_millis(100));

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Renaming chain LONG to L"));
        assert!(content.contains("INFO"));
        assert!(content.contains("ThreadId"));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let (sender, _receiver) = mpsc::channel(1);
            let result = setup_logging(0, false, Some(invalid_path), sender);
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }

    #[test]
    fn ui_writer_sends_one_line_per_event() {
        let (sender, mut receiver) = mpsc::channel(8);
        let make_writer = UiLogMakeWriter::new(sender);

        {
            let mut writer = make_writer.make_writer();
            write!(writer, "WARN ").unwrap();
            writeln!(writer, "Failed to convert a.cif").unwrap();
        }
        drop(make_writer.make_writer());

        match receiver.try_recv().unwrap() {
            UiEvent::Log(line) => assert_eq!(line, "WARN Failed to convert a.cif"),
            other => panic!("Incorrect UI event received: {other:?}"),
        }
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn ui_writer_survives_a_closed_ui() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);
        let make_writer = UiLogMakeWriter::new(sender);

        let mut writer = make_writer.make_writer();
        writeln!(writer, "printed to stderr instead").unwrap();
        drop(writer);
    }

    #[test]
    fn formatted_events_reach_the_ui_channel() {
        let (sender, mut receiver) = mpsc::channel(8);
        let layer = fmt::layer()
            .with_writer(UiLogMakeWriter::new(sender))
            .with_ansi(false)
            .with_target(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::INFO)
            .with(layer);

        tracing::subscriber::with_default(subscriber, || {
            info!("Renaming chain {} to {}", "AB", "B");
            debug!("not shown at INFO");
        });

        match receiver.try_recv().unwrap() {
            UiEvent::Log(line) => {
                assert!(line.contains("INFO"));
                assert!(line.contains("Renaming chain AB to B"));
                assert!(!line.ends_with('\n'));
            }
            other => panic!("Incorrect UI event received: {other:?}"),
        }
        assert!(receiver.try_recv().is_err());
    }
}
