use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Write},
    path::Path,
};

use calc_core::Session;
use tracing::{debug, warn};

use crate::cli::print_error;

pub const PROMPT: &str = ">> ";
const EXIT_WORDS: [&str; 3] = ["sair", "exit", "quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Exit,
    Blank,
    Source(&'a str),
}

/// Sorts a raw input line. Exit words are matched case-insensitively after
/// trimming; `Source` keeps the line as typed, minus the line terminator, so
/// error spans line up with what the user sees.
pub fn classify(input: &str) -> Line<'_> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        Line::Blank
    } else if EXIT_WORDS.iter().any(|word| trimmed.eq_ignore_ascii_case(word)) {
        Line::Exit
    } else {
        Line::Source(input.trim_end_matches(['\n', '\r']))
    }
}

/// Reads `input` line by line until an exit word or end of input, passing
/// every non-blank line and its 1-based number to `handle`.
pub fn read_loop<R: BufRead>(
    mut input: R,
    prompt: Option<&str>,
    mut handle: impl FnMut(usize, &str),
) -> std::io::Result<()> {
    let mut line_no = 0;

    loop {
        if let Some(prompt) = prompt {
            print!("{prompt}");
            std::io::stdout().flush()?;
        }

        let mut buf = String::new();

        match input.read_line(&mut buf) {
            Ok(0) => {
                if prompt.is_some() {
                    println!();
                }

                return Ok(());
            },
            Ok(_) => line_no += 1,
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                line_no += 1;
                warn!(line_no, "skipping line that is not valid UTF-8");

                continue;
            },
            Err(err) => return Err(err),
        }

        match classify(&buf) {
            Line::Exit => return Ok(()),
            Line::Blank => {},
            Line::Source(src) => handle(line_no, src),
        }
    }
}

fn evaluate_and_print(session: &mut Session, src: &str, name: &str) {
    match session.evaluate(src) {
        Ok(value) => println!("{value}"),
        Err(err) => print_error(&err, name),
    }
}

pub fn start(session: &mut Session) -> std::io::Result<()> {
    println!("Enter expressions or assignments (e.g. x = 2 + 3). Type 'exit' to quit.");

    let stdin = std::io::stdin();

    read_loop(stdin.lock(), Some(PROMPT), |_, src| {
        evaluate_and_print(session, src, "<stdin>")
    })
}

pub fn run_file(session: &mut Session, path: &Path) -> std::io::Result<()> {
    let file = File::open(path)?;
    let name = path.display().to_string();

    read_loop(BufReader::new(file), None, |line_no, src| {
        evaluate_and_print(session, src, &format!("{name}:{line_no}"))
    })?;

    for (variable, value) in session.environment().iter() {
        debug!(variable, value, "bound at end of file");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{classify, read_loop, Line};

    #[test]
    fn test_classify() {
        assert_eq!(classify("exit\n"), Line::Exit);
        assert_eq!(classify("  QUIT  \r\n"), Line::Exit);
        assert_eq!(classify("Sair"), Line::Exit);
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify(" \t \n"), Line::Blank);
        assert_eq!(classify("  x = 1\r\n"), Line::Source("  x = 1"));
        assert_eq!(classify("exit 1\n"), Line::Source("exit 1"));
    }

    #[test]
    fn test_read_loop_stops_at_exit_word() -> std::io::Result<()> {
        let input = Cursor::new("x = 1\n\n   \ny\nquit\nnever = 2\n");
        let mut seen = vec![];

        read_loop(input, None, |line_no, src| seen.push((line_no, src.to_string())))?;

        assert_eq!(seen, vec![
            (1, "x = 1".to_string()),
            (4, "y".to_string()),
        ]);

        Ok(())
    }

    #[test]
    fn test_read_loop_ends_at_end_of_input() -> std::io::Result<()> {
        let input = Cursor::new("1 +\n2 @ 3\n4");
        let mut seen = vec![];

        read_loop(input, None, |_, src| seen.push(src.to_string()))?;

        assert_eq!(seen, vec!["1 +", "2 @ 3", "4"]);

        Ok(())
    }

    #[test]
    fn test_read_loop_skips_invalid_utf8() -> std::io::Result<()> {
        let input = Cursor::new(b"1\n\xff\xfe\n2\n".to_vec());
        let mut seen = vec![];

        read_loop(input, None, |line_no, src| seen.push((line_no, src.to_string())))?;

        assert_eq!(seen, vec![
            (1, "1".to_string()),
            (3, "2".to_string()),
        ]);

        Ok(())
    }
}
