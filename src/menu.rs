use crate::app::Factory;
use crate::command::{CommandFactory, MenuCommand};
use crate::course::{parse_credit, parse_grade};
use crate::error::InputError;
use crate::io_adapters::LineSource;
use crate::session::Session;
use anyhow::Result;
use log::{debug, warn};
use std::io::Write;

/// Menu commands known to the application at compile time.
pub(crate) trait BuiltinCommand: Sized + Default {
    /// Input that selects the command, e.g. "1".
    fn key() -> &'static str;

    /// Menu text shown after the key.
    fn summary() -> &'static str;

    /// Executes the command using the provided input, output and session.
    fn execute(
        self,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()>;
}

impl<T: BuiltinCommand> MenuCommand for T {
    fn execute(
        self: Box<Self>,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        <T as BuiltinCommand>::execute(*self, input, out, session)
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn key(&self) -> &'static str {
        T::key()
    }

    fn summary(&self) -> &'static str {
        T::summary()
    }

    fn try_create(&self, key: &str) -> Option<Box<dyn MenuCommand>> {
        if key == T::key() {
            Some(Box::new(T::default()))
        } else {
            None
        }
    }
}

/// Prompt for one field. Running out of input ends the session.
fn read_field(
    input: &mut dyn LineSource,
    out: &mut dyn Write,
    session: &mut Session,
    prompt: &str,
) -> Result<Option<String>> {
    let line = input.read_line(prompt, out)?;
    if line.is_none() {
        writeln!(out)?;
        session.end();
    }
    Ok(line)
}

#[derive(Default)]
/// Add a course, or update the grade and credits of a known one.
pub struct AddCourse;

impl AddCourse {
    fn parse(grade: &str, credits: &str) -> Result<(i64, u32), InputError> {
        Ok((parse_grade(grade)?, parse_credit(credits)?))
    }
}

impl BuiltinCommand for AddCourse {
    fn key() -> &'static str {
        "1"
    }

    fn summary() -> &'static str {
        "add course"
    }

    fn execute(
        self,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        let Some(name) = read_field(input, out, session, "course: ")? else {
            return Ok(());
        };
        let Some(grade) = read_field(input, out, session, "grade: ")? else {
            return Ok(());
        };
        let Some(credits) = read_field(input, out, session, "credits: ")? else {
            return Ok(());
        };

        match Self::parse(&grade, &credits) {
            Ok((grade, credit)) => session.record.add_or_update(&name, grade, credit),
            Err(e) => {
                warn!("rejected input for course {:?}: {}", name, e);
                writeln!(out, "{}", e)?;
            }
        }
        Ok(())
    }
}

#[derive(Default)]
/// Print what is known about one course.
pub struct GetCourse;

impl BuiltinCommand for GetCourse {
    fn key() -> &'static str {
        "2"
    }

    fn summary() -> &'static str {
        "get course data"
    }

    fn execute(
        self,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        let Some(name) = read_field(input, out, session, "course: ")? else {
            return Ok(());
        };

        match session.record.lookup(&name) {
            Some(entry) => writeln!(out, "{}", entry)?,
            None => {
                debug!("no entry for {:?}", name);
                writeln!(out, "no entry for this course")?;
            }
        }
        Ok(())
    }
}

#[derive(Default)]
/// Print course count, credits, mean grade and the grade distribution.
pub struct ShowStatistics;

impl BuiltinCommand for ShowStatistics {
    fn key() -> &'static str {
        "3"
    }

    fn summary() -> &'static str {
        "statistics"
    }

    fn execute(
        self,
        _input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        match session.record.statistics() {
            Ok(stats) => writeln!(out, "{}", stats)?,
            Err(e) => writeln!(out, "{}", e)?,
        }
        Ok(())
    }
}

#[derive(Default)]
/// Leave the application.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn key() -> &'static str {
        "0"
    }

    fn summary() -> &'static str {
        "exit"
    }

    fn execute(
        self,
        _input: &mut dyn LineSource,
        _out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        session.end();
        Ok(())
    }
}
