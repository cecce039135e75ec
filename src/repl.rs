use std::io::{self, BufRead, Write};

use anyhow::Result;

const PROMPT: &str = ">> ";

pub fn start() -> Result<()> {
    let stdin = io::stdin();
    run(stdin.lock(), io::stdout())
}

fn run(mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut engine = calc_rs::new_interpreter();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                writeln!(output)?;
                return Ok(());
            }
            Ok(_) => {}
            // The offending line has already been consumed.
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                writeln!(output, "error: {}", err)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        if line.trim() == ":env" {
            for (name, value) in engine.bindings() {
                writeln!(output, "{} = {}", name, value)?;
            }
            continue;
        }

        match engine.run(&line) {
            Ok(output_line) if output_line.is_empty() => {}
            Ok(output_line) => writeln!(output, "{}", output_line)?,
            Err(err) => writeln!(output, "error: {}", err)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    fn session(input: &[u8]) -> String {
        let mut output = Vec::new();
        run(Cursor::new(input.to_vec()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session() {
        let output = session(b"x = 4\n\nx * 2\ny\n:env\n");
        assert_eq!(
            output,
            ">> 4\n>> >> 8\n>> error: identifier not found: y\n>> x = 4\n>> \n"
        );
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session() {
        let output = session(b"x = 1 + 1\n\xff\xfe\nx * 3\n");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ">> 2");
        assert!(lines[1].starts_with(">> error: "), "got {}", lines[1]);
        assert_eq!(lines[2], ">> 6");
        assert_eq!(lines[3], ">> ");
    }
}
