use crate::command::{CommandFactory, MenuCommand};
use crate::io_adapters::LineSource;
use crate::session::Session;
use anyhow::Result;
use log::{debug, info};
use std::io::Write;

/// Factory allows creating instances of MenuCommand.
///
/// Only supports commands defined in this crate, see [`crate::menu`].
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The interactive course record application.
///
/// The application owns a [`Session`] holding the course record and a list of
/// [`CommandFactory`] objects that are queried to create commands from what
/// the user types. See [`App::new`] for the commands included out of the box.
///
/// Example
/// ```
/// use course_record::App;
/// use course_record::io_adapters::{MemWriter, PlainSource};
///
/// let (out, handle) = MemWriter::with_handle();
/// let input = PlainSource::from_script("1\nMath\n5\n3\n0\n");
/// let mut app = App::new(Box::new(input), Box::new(out));
/// app.run().unwrap();
///
/// assert_eq!(app.session().record.lookup("Math").unwrap().grade(), 5);
/// assert!(String::from_utf8_lossy(&handle.borrow()).starts_with("1 add course\n"));
/// ```
pub struct App {
    session: Session,
    commands: Vec<Box<dyn CommandFactory>>,
    input: Box<dyn LineSource>,
    out: Box<dyn Write>,
}

impl App {
    /// Create an application with the default menu:
    /// - `1` add course
    /// - `2` get course data
    /// - `3` statistics
    /// - `0` exit
    pub fn new(input: Box<dyn LineSource>, out: Box<dyn Write>) -> Self {
        use crate::menu::*;
        Self::with_commands(
            vec![
                Box::new(Factory::<AddCourse>::default()),
                Box::new(Factory::<GetCourse>::default()),
                Box::new(Factory::<ShowStatistics>::default()),
                Box::new(Factory::<Exit>::default()),
            ],
            input,
            out,
        )
    }

    /// Create an application with a custom set of command factories.
    ///
    /// The menu lists the commands in the order given.
    pub fn with_commands(
        commands: Vec<Box<dyn CommandFactory>>,
        input: Box<dyn LineSource>,
        out: Box<dyn Write>,
    ) -> Self {
        Self {
            session: Session::new(),
            commands,
            input,
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the user exits or input runs out.
    ///
    /// The menu is shown once at start and again after any input that is not
    /// a known command. Errors are only returned for failed terminal I/O.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        self.help()?;

        while !self.session.should_exit {
            writeln!(self.out)?;
            match self.input.read_line("command: ", &mut *self.out)? {
                Some(line) => self.dispatch(&line)?,
                None => {
                    writeln!(self.out)?;
                    self.session.end();
                }
            }
        }

        self.out.flush()?;
        info!(
            "session finished with {} course(s) recorded",
            self.session.record.len()
        );
        Ok(())
    }

    /// Execute the command selected by `key`, or show the menu when nothing matches.
    pub fn dispatch(&mut self, key: &str) -> Result<()> {
        match self.find_command(key) {
            Some(cmd) => {
                debug!("running command {:?}", key);
                cmd.execute(&mut *self.input, &mut *self.out, &mut self.session)
            }
            None => {
                debug!("unrecognized command {:?}", key);
                self.help()
            }
        }
    }

    /// Print the command menu.
    pub fn help(&mut self) -> Result<()> {
        for factory in &self.commands {
            writeln!(self.out, "{} {}", factory.key(), factory.summary())?;
        }
        Ok(())
    }

    fn find_command(&self, key: &str) -> Option<Box<dyn MenuCommand>> {
        self.commands
            .iter()
            .find_map(|factory| factory.try_create(key))
    }
}
