use parking_lot::Mutex;

/// Destination for change-log lines
///
/// Implementations swallow their own I/O failures: `append` never reports
/// an error to the caller and `read_all` returns whatever could be read.
pub trait LogSink: Send + Sync {
    /// Append one line
    fn append(&self, line: &str);

    /// Every line appended so far, oldest first
    fn read_all(&self) -> Vec<String>;
}

/// In-memory sink
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    #[inline]
    fn append(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }

    fn read_all(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}
