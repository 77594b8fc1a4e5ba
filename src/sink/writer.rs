//! Line-oriented sink writers.
//!
//! Two write disciplines:
//! - synchronous: the emitting thread writes through a mutex
//! - asynchronous: lines are handed to a dedicated background thread over a
//!   channel; the thread exits when the last writer handle is dropped
//!
//! Write errors are swallowed. A flush handshake lets callers (and tests)
//! wait until the background thread has drained everything sent so far.

use std::io::Write;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread;

enum Command {
    Line(String),
    Flush(mpsc::SyncSender<()>),
}

enum WriterKind {
    Direct(Mutex<Box<dyn Write + Send>>),
    Background(mpsc::Sender<Command>),
}

/// A single sink target accepting whole encoded lines.
pub struct LineWriter {
    kind: WriterKind,
}

impl LineWriter {
    /// A writer that writes inline, serialized by a mutex.
    pub fn direct(target: Box<dyn Write + Send>) -> Self {
        Self {
            kind: WriterKind::Direct(Mutex::new(target)),
        }
    }

    /// A writer backed by a dedicated thread draining a channel.
    pub fn background(mut target: Box<dyn Write + Send>) -> Self {
        let (tx, rx) = mpsc::channel::<Command>();
        thread::spawn(move || {
            for command in rx {
                match command {
                    Command::Line(line) => {
                        let _ = target.write_all(line.as_bytes());
                        let _ = target.flush();
                    }
                    Command::Flush(ack) => {
                        let _ = target.flush();
                        let _ = ack.send(());
                    }
                }
            }
        });
        Self {
            kind: WriterKind::Background(tx),
        }
    }

    /// Write one encoded record. A trailing newline is appended.
    pub fn write_line(&self, line: &str) {
        match &self.kind {
            WriterKind::Direct(target) => {
                // Recover the inner writer if a previous writer panicked.
                let mut target = match target.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let _ = target.write_all(line.as_bytes());
                let _ = target.write_all(b"\n");
                let _ = target.flush();
            }
            WriterKind::Background(tx) => {
                let mut owned = String::with_capacity(line.len() + 1);
                owned.push_str(line);
                owned.push('\n');
                let _ = tx.send(Command::Line(owned));
            }
        }
    }

    /// Block until every line written so far has reached the target.
    pub fn flush(&self) {
        match &self.kind {
            WriterKind::Direct(target) => {
                let mut target = match target.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let _ = target.flush();
            }
            WriterKind::Background(tx) => {
                let (ack_tx, ack_rx) = mpsc::sync_channel(0);
                if tx.send(Command::Flush(ack_tx)).is_ok() {
                    let _ = ack_rx.recv();
                }
            }
        }
    }
}

/// Fan-out over zero or more sink targets.
pub struct MultiWriter {
    targets: Vec<LineWriter>,
}

impl MultiWriter {
    pub fn new(targets: Vec<LineWriter>) -> Self {
        Self { targets }
    }

    pub fn write_line(&self, line: &str) {
        for target in &self.targets {
            target.write_line(line);
        }
    }

    pub fn flush(&self) {
        for target in &self.targets {
            target.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Test target collecting everything written into a shared buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_direct_writer() {
        let buf = SharedBuf::default();
        let writer = LineWriter::direct(Box::new(buf.clone()));

        writer.write_line("one");
        writer.write_line("two");
        assert_eq!(buf.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_background_writer_drains_on_flush() {
        let buf = SharedBuf::default();
        let writer = LineWriter::background(Box::new(buf.clone()));

        for i in 0..100 {
            writer.write_line(&format!("line {}", i));
        }
        writer.flush();

        let contents = buf.contents();
        assert_eq!(contents.lines().count(), 100);
        assert!(contents.starts_with("line 0\n"));
        assert!(contents.ends_with("line 99\n"));
    }

    #[test]
    fn test_multi_writer_fans_out() {
        let buf_a = SharedBuf::default();
        let buf_b = SharedBuf::default();
        let multi = MultiWriter::new(vec![
            LineWriter::direct(Box::new(buf_a.clone())),
            LineWriter::background(Box::new(buf_b.clone())),
        ]);

        multi.write_line("hello");
        multi.flush();

        assert_eq!(buf_a.contents(), "hello\n");
        assert_eq!(buf_b.contents(), "hello\n");
    }

    #[test]
    fn test_empty_multi_writer_is_a_no_op() {
        let multi = MultiWriter::new(Vec::new());
        multi.write_line("dropped");
        multi.flush();
    }
}
