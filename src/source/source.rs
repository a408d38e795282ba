use std::{
    env,
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::{Path, PathBuf},
    rc::Rc,
};

use log::info;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Produces the lines of a source in order, without line terminators.
///
/// Lines are split on `\n` and a trailing `\r` is dropped. Bytes that are
/// not valid UTF-8 are replaced with U+FFFD, one per byte, rather than
/// failing the read.
pub struct LineSource {
    name: Rc<String>,
    reader: Box<dyn BufRead>,
    lines_read: u32,
    done: bool,
}

impl LineSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<LineSource, Error> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::new(ErrorImpl::EmptySourcePath, Position::null()));
        }

        let name = Rc::new(path.to_string_lossy().into_owned());
        let absolute = absolute_path(path).map_err(|e| {
            Error::new(
                ErrorImpl::SourceUnreadable {
                    path: name.to_string(),
                    reason: e.to_string(),
                },
                Position(0, Rc::clone(&name)),
            )
        })?;

        let exists = absolute.try_exists().map_err(|e| {
            Error::new(
                ErrorImpl::SourceUnreadable {
                    path: name.to_string(),
                    reason: e.to_string(),
                },
                Position(0, Rc::clone(&name)),
            )
        })?;
        if !exists {
            return Err(Error::new(
                ErrorImpl::SourceNotFound {
                    path: name.to_string(),
                },
                Position(0, Rc::clone(&name)),
            ));
        }

        let file = File::open(&absolute).map_err(|e| {
            Error::new(
                ErrorImpl::SourceUnreadable {
                    path: name.to_string(),
                    reason: e.to_string(),
                },
                Position(0, Rc::clone(&name)),
            )
        })?;

        info!("opened source {}", absolute.display());

        Ok(LineSource {
            name,
            reader: Box::new(BufReader::new(file)),
            lines_read: 0,
            done: false,
        })
    }

    /// In-memory source, mostly for tests and piping text through the scanner.
    pub fn from_text(name: &str, text: &str) -> LineSource {
        LineSource {
            name: Rc::new(String::from(name)),
            reader: Box::new(Cursor::new(text.as_bytes().to_vec())),
            lines_read: 0,
            done: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Iterator for LineSource {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.lines_read += 1;
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
                Some(Ok(decode_line(&buf)))
            }
            Err(e) => {
                self.done = true;
                Some(Err(Error::new(
                    ErrorImpl::SourceUnreadable {
                        path: self.name.to_string(),
                        reason: e.to_string(),
                    },
                    Position(self.lines_read + 1, Rc::clone(&self.name)),
                )))
            }
        }
    }
}

/// Decodes a raw line, replacing every byte of an invalid sequence with its
/// own U+FFFD so later columns stay one per source byte of garbage.
pub fn decode_line(bytes: &[u8]) -> String {
    let mut line = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        line.push_str(chunk.valid());
        for _ in chunk.invalid() {
            line.push(char::REPLACEMENT_CHARACTER);
        }
    }
    line
}

fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
