//! Line-oriented input helpers for interactive commands

use std::io::{BufRead, Write};

use crate::error::{ContactError, ContactResult};

/// Read one line, without its line terminator
///
/// Returns `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> ContactResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
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

/// Print a message and read the answer
///
/// End of input is an error here: an operation cannot continue without its
/// answer.
pub fn prompt<R: BufRead>(input: &mut R, message: &str) -> ContactResult<String> {
    print!("{}", message);
    std::io::stdout().flush()?;

    read_line(input)?.ok_or_else(|| ContactError::Io("unexpected end of input".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut input = Cursor::new("Alice\r\n  Bob  \nlast");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("Alice"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("  Bob  "));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("last"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_prompt_at_eof_fails() {
        let mut input = Cursor::new("");
        assert!(matches!(
            prompt(&mut input, "Enter name: "),
            Err(ContactError::Io(_))
        ));
    }
}
