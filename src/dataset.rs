//! Tabular dataset ingestion and schedule export.
//!
//! Exam and room reference data arrive as comma-separated files with a
//! header row. Header names are matched case-insensitively (normalized
//! to lower case); a small set of aliases covers the column spellings
//! seen across dataset exports. Values are plain fields — no quoting
//! support, matching the simple tabular files this system consumes and
//! produces.
//!
//! Exam file columns: `exam_id` (alias `course_code`), `num_students`
//! (alias `students`), optional `exam_day`/`day`, `exam_time`/`time`,
//! `exam_type`.
//! Room file columns: `classroom_id` (aliases `room_id`, `room_number`),
//! `capacity`, optional `building_name`, `room_type`.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::models::{Exam, ExamType, Room, RoomType};
use crate::schedule::ScheduleEntry;

/// Errors raised while reading a dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// A required column is absent from the header row.
    MissingColumn {
        /// Canonical name of the missing column.
        column: &'static str,
    },
    /// A data cell could not be interpreted.
    Parse {
        /// 1-based line number of the offending row.
        line: usize,
        /// What went wrong.
        message: String,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "I/O error: {err}"),
            DatasetError::MissingColumn { column } => {
                write!(f, "missing required column '{column}'")
            }
            DatasetError::Parse { line, message } => {
                write!(f, "line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(err: io::Error) -> Self {
        DatasetError::Io(err)
    }
}

/// Lower-cased header cells of the first non-empty line.
fn read_header<R: BufRead>(
    lines: &mut std::iter::Enumerate<io::Lines<R>>,
) -> Result<Vec<String>, DatasetError> {
    for (_, line) in lines.by_ref() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        return Ok(line
            .split(',')
            .map(|cell| cell.trim().to_lowercase())
            .collect());
    }
    Err(DatasetError::Parse {
        line: 0,
        message: "dataset has no header row".into(),
    })
}

/// Index of the first header cell matching any of `names`.
fn find_column(header: &[String], names: &[&str]) -> Option<usize> {
    header
        .iter()
        .position(|cell| names.iter().any(|name| cell == name))
}

fn require_column(
    header: &[String],
    names: &[&str],
    canonical: &'static str,
) -> Result<usize, DatasetError> {
    find_column(header, names).ok_or(DatasetError::MissingColumn { column: canonical })
}

fn cell<'a>(fields: &'a [&'a str], idx: usize, line: usize) -> Result<&'a str, DatasetError> {
    fields.get(idx).copied().ok_or(DatasetError::Parse {
        line,
        message: format!("row has no column {}", idx + 1),
    })
}

fn optional_cell<'a>(fields: &'a [&'a str], idx: Option<usize>) -> Option<&'a str> {
    let value = fields.get(idx?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_u32(value: &str, what: &str, line: usize) -> Result<u32, DatasetError> {
    value.trim().parse().map_err(|_| DatasetError::Parse {
        line,
        message: format!("invalid {what} '{value}'"),
    })
}

/// Parses exam records from a tabular reader.
pub fn parse_exams<R: BufRead>(reader: R) -> Result<Vec<Exam>, DatasetError> {
    let mut lines = reader.lines().enumerate();
    let header = read_header(&mut lines)?;

    let id_col = require_column(&header, &["exam_id", "course_code"], "exam_id")?;
    let students_col = require_column(&header, &["num_students", "students"], "num_students")?;
    let day_col = find_column(&header, &["exam_day", "day"]);
    let time_col = find_column(&header, &["exam_time", "time"]);
    let type_col = find_column(&header, &["exam_type"]);

    let mut exams = Vec::new();
    for (idx, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let id = cell(&fields, id_col, lineno)?;
        let students = parse_u32(cell(&fields, students_col, lineno)?, "student count", lineno)?;

        let mut exam = Exam::new(id, students);
        if let Some(day) = optional_cell(&fields, day_col) {
            exam = exam.with_day(parse_u32(day, "exam day", lineno)?);
        }
        if let Some(time) = optional_cell(&fields, time_col) {
            exam = exam.with_time(time);
        }
        if let Some(tag) = optional_cell(&fields, type_col) {
            exam = exam.with_exam_type(parse_exam_type(tag, lineno)?);
        }
        exams.push(exam);
    }

    Ok(exams)
}

/// Parses room records from a tabular reader.
pub fn parse_rooms<R: BufRead>(reader: R) -> Result<Vec<Room>, DatasetError> {
    let mut lines = reader.lines().enumerate();
    let header = read_header(&mut lines)?;

    let id_col = require_column(
        &header,
        &["classroom_id", "room_id", "room_number"],
        "classroom_id",
    )?;
    let capacity_col = require_column(&header, &["capacity"], "capacity")?;
    let building_col = find_column(&header, &["building_name"]);
    let type_col = find_column(&header, &["room_type"]);

    let mut rooms = Vec::new();
    for (idx, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let id = cell(&fields, id_col, lineno)?;
        let capacity = parse_u32(cell(&fields, capacity_col, lineno)?, "capacity", lineno)?;

        let mut room = Room::new(id, capacity);
        if let Some(building) = optional_cell(&fields, building_col) {
            room = room.with_building(building);
        }
        if let Some(tag) = optional_cell(&fields, type_col) {
            room = room.with_room_type(parse_room_type(tag, lineno)?);
        }
        rooms.push(room);
    }

    Ok(rooms)
}

fn parse_exam_type(tag: &str, line: usize) -> Result<ExamType, DatasetError> {
    match tag.to_lowercase().as_str() {
        "theory" => Ok(ExamType::Theory),
        "practical" => Ok(ExamType::Practical),
        other => Err(DatasetError::Parse {
            line,
            message: format!("unknown exam type '{other}'"),
        }),
    }
}

fn parse_room_type(tag: &str, line: usize) -> Result<RoomType, DatasetError> {
    match tag.to_lowercase().as_str() {
        "lecture" => Ok(RoomType::Lecture),
        "lab" => Ok(RoomType::Lab),
        other => Err(DatasetError::Parse {
            line,
            message: format!("unknown room type '{other}'"),
        }),
    }
}

/// Loads exam records from a file.
pub fn load_exams<P: AsRef<Path>>(path: P) -> Result<Vec<Exam>, DatasetError> {
    let exams = parse_exams(BufReader::new(File::open(&path)?))?;
    log::debug!(
        "loaded {} exams from {}",
        exams.len(),
        path.as_ref().display()
    );
    Ok(exams)
}

/// Loads room records from a file.
pub fn load_rooms<P: AsRef<Path>>(path: P) -> Result<Vec<Room>, DatasetError> {
    let rooms = parse_rooms(BufReader::new(File::open(&path)?))?;
    log::debug!(
        "loaded {} rooms from {}",
        rooms.len(),
        path.as_ref().display()
    );
    Ok(rooms)
}

/// Writes the final schedule as comma-separated rows.
pub fn write_schedule<W: Write>(mut writer: W, entries: &[ScheduleEntry]) -> io::Result<()> {
    writeln!(writer, "exam_id,students,room_id,building,capacity,day,time")?;
    for entry in entries {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            entry.exam_id,
            entry.students,
            entry.room_id,
            entry.building.as_deref().unwrap_or(""),
            entry.capacity,
            entry.day.map(|d| d.to_string()).unwrap_or_default(),
            entry.time.as_deref().unwrap_or(""),
        )?;
    }
    Ok(())
}

/// Writes the final schedule to a file.
pub fn save_schedule<P: AsRef<Path>>(path: P, entries: &[ScheduleEntry]) -> io::Result<()> {
    let file = File::create(&path)?;
    write_schedule(file, entries)?;
    log::debug!(
        "saved {} schedule rows to {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(())
}
