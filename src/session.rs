use crate::record::CourseRecord;

/// Mutable state of one interactive session, handed to every menu command.
///
/// The session contains:
/// - `record`: the course record being edited.
/// - `should_exit`: a flag the application loop checks to know when to terminate.
///
/// Fields are public so commands can reach them directly.
#[derive(Debug, Default)]
pub struct Session {
    /// Courses entered so far.
    pub record: CourseRecord,
    /// When set to true, the application loop stops after the current command.
    pub should_exit: bool,
}

impl Session {
    /// Start a session with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session as finished.
    pub fn end(&mut self) {
        self.should_exit = true;
    }
}
