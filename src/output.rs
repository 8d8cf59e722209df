//! Line sink
//!
//! The only place generated text touches I/O. Lines are written in order,
//! each followed by `\n`, then the writer is flushed.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Write every line to `writer`, returning how many were written
pub fn write_lines<W, I>(writer: &mut W, lines: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut count = 0;
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Where generated lines go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Destination::File(path.to_path_buf()),
            None => Destination::Stdout,
        }
    }

    pub fn write<I>(&self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = String>,
    {
        match self {
            Destination::Stdout => {
                let mut out = io::stdout().lock();
                write_lines(&mut out, lines).context("Failed to write to stdout")
            }
            Destination::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {:?}", path))?;
                let mut out = BufWriter::new(file);
                write_lines(&mut out, lines).with_context(|| format!("Failed to write {:?}", path))
            }
        }
    }
}
