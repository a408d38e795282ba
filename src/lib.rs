#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;
pub mod scan;
pub mod source;
pub mod summary;

/// Line number and source name. Line 0 means the position is not tied to a
/// particular line.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0 && self.1.as_str() == "<null>"
    }
}

pub fn format_error(error: &Error) -> Vec<String> {
    /*
        Error: SourceNotFound (File `entrada.txt` does not exist, check the path)
        -> entrada.txt
    */

    let mut lines = vec![];

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!(
            "Error: {} ({})",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let position = error.get_position();
    if !position.is_null() {
        if position.0 == 0 {
            lines.push(format!("-> {}", position.1));
        } else {
            lines.push(format!("-> {}:{}", position.1, position.0));
        }
    }

    lines
}

pub fn display_error(error: &Error) {
    for line in format_error(error) {
        eprintln!("{}", line);
    }
}
