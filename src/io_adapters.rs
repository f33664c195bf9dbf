use log::debug;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::io::{BufRead, Cursor, Result as IoResult, Write};
use std::rc::Rc;

/// A source of user input lines that knows how to show a prompt.
///
/// `Ok(None)` means the user is done: end of input, or an interrupt on a terminal.
pub trait LineSource {
    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Sources that do not draw their own prompt write it to `out`.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> anyhow::Result<Option<String>>;
}

/// Interactive terminal input with line editing and history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> anyhow::Result<Option<String>> {
        // Anything printed before the prompt must reach the terminal first.
        out.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                debug!("interrupted");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                debug!("end of input");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Plain line reader over any buffered input, e.g. piped stdin.
pub struct PlainSource<R> {
    reader: R,
}

impl<R: BufRead> PlainSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl PlainSource<Cursor<Vec<u8>>> {
    /// Memory-backed source that replays `script` line by line.
    pub fn from_script(script: &str) -> Self {
        Self::new(Cursor::new(script.as_bytes().to_vec()))
    }
}

impl<R: BufRead> LineSource for PlainSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> anyhow::Result<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Memory-backed writer for capturing everything the application prints.
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self {
            buf: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Convenience: create writer and return (writer, rc_handle).
    ///
    /// The handle stays readable after the writer has been boxed and handed away.
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let mw = MemWriter::new();
        let rc = mw.buf.clone();
        (mw, rc)
    }
}

impl Default for MemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}
