//! Interactive text menu over the record store.
//!
//! # Responsibility
//! - Print the five numbered options and read one choice per iteration.
//! - Prompt for exactly the fields each operation needs.
//! - Turn store outcomes into success / failure / not-found messages.
//!
//! # Invariants
//! - No state is carried between iterations.
//! - Malformed numbers are reported and the same field is asked again.
//! - Storage failures end the current operation, never the loop.

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use student_core::{RecordStore, RepoError, Student, StudentId};

pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Debug)]
pub enum MenuError {
    Io(io::Error),
    /// Standard input reached end of file.
    InputClosed,
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::InputClosed => write!(f, "input closed"),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InputClosed => None,
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Accepts any integer spelling (`05`, `+1`) of the option numbers.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(1) => Self::Add,
            Ok(2) => Self::List,
            Ok(3) => Self::Update,
            Ok(4) => Self::Delete,
            Ok(5) => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

pub struct Menu<'store, R, W> {
    store: &'store RecordStore,
    input: R,
    output: W,
}

impl<'store, R: BufRead, W: Write> Menu<'store, R, W> {
    pub fn new(store: &'store RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs until the operator picks exit or input ends.
    pub fn run(&mut self) -> MenuResult<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(MenuError::InputClosed) => {
                    writeln!(self.output)?;
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        Ok(())
    }

    /// One iteration. Returns `false` once exit is chosen.
    fn step(&mut self) -> MenuResult<bool> {
        self.print_options()?;
        let choice = MenuChoice::parse(&self.prompt_line("Enter your choice: ")?);
        debug!("event=menu_choice module=cli choice={choice:?}");

        match choice {
            MenuChoice::Add => self.add_student()?,
            MenuChoice::List => self.list_students()?,
            MenuChoice::Update => self.update_student()?,
            MenuChoice::Delete => self.delete_student()?,
            MenuChoice::Exit => return Ok(false),
            MenuChoice::Invalid => writeln!(self.output, "Invalid choice! Try again.")?,
        }

        Ok(true)
    }

    fn print_options(&mut self) -> MenuResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== STUDENT MANAGEMENT SYSTEM =====")?;
        writeln!(self.output, "1. Add Student")?;
        writeln!(self.output, "2. View All Students")?;
        writeln!(self.output, "3. Update Student Marks")?;
        writeln!(self.output, "4. Delete Student")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    fn add_student(&mut self) -> MenuResult<()> {
        let id: StudentId = self.prompt_parsed("Enter Student ID: ")?;
        let name = self.prompt_line("Enter Name: ")?;
        let department = self.prompt_line("Enter Department: ")?;
        let marks = self.prompt_marks("Enter Marks: ")?;

        match self.store.add(&Student::new(id, name, department, marks)) {
            Ok(()) => writeln!(self.output, "Student added successfully!")?,
            Err(err @ RepoError::DuplicateKey(_)) => writeln!(self.output, "Error: {err}")?,
            Err(err) => writeln!(self.output, "Error: could not add student: {err}")?,
        }
        Ok(())
    }

    fn list_students(&mut self) -> MenuResult<()> {
        match self.store.list_all() {
            Ok(students) if students.is_empty() => {
                writeln!(self.output, "No students found!")?;
            }
            Ok(students) => {
                for student in &students {
                    writeln!(self.output, "{student}")?;
                }
            }
            Err(err) => writeln!(self.output, "Error: could not list students: {err}")?,
        }
        Ok(())
    }

    fn update_student(&mut self) -> MenuResult<()> {
        let id: StudentId = self.prompt_parsed("Enter Student ID to update: ")?;
        let marks = self.prompt_marks("Enter new Marks: ")?;

        match self.store.update_marks(id, marks) {
            Ok(0) => writeln!(self.output, "Student not found!")?,
            Ok(_) => writeln!(self.output, "Student updated successfully!")?,
            Err(err) => writeln!(self.output, "Error: could not update student: {err}")?,
        }
        Ok(())
    }

    fn delete_student(&mut self) -> MenuResult<()> {
        let id: StudentId = self.prompt_parsed("Enter Student ID to delete: ")?;

        match self.store.delete(id) {
            Ok(0) => writeln!(self.output, "Student not found!")?,
            Ok(_) => writeln!(self.output, "Student deleted successfully!")?,
            Err(err) => writeln!(self.output, "Error: could not delete student: {err}")?,
        }
        Ok(())
    }

    /// Reads one line without its terminator. Invalid UTF-8 is replaced, not rejected.
    fn prompt_line(&mut self, prompt: &str) -> MenuResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(MenuError::InputClosed);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn prompt_parsed<T: FromStr>(&mut self, prompt: &str) -> MenuResult<T> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid number, try again.")?,
            }
        }
    }

    fn prompt_marks(&mut self, prompt: &str) -> MenuResult<f64> {
        loop {
            let marks: f64 = self.prompt_parsed(prompt)?;
            if marks.is_finite() {
                return Ok(marks);
            }
            writeln!(self.output, "Invalid number, try again.")?;
        }
    }
}
