// FHRSView - ui/console.rs
//
// Numbered menus and validated prompts over any line-oriented input.
// Generic over `BufRead`/`Write` so the menu loop can be driven from tests.
//
// End of input is reported as `Ok(None)` from every prompt; callers treat it
// as "quit" rather than re-prompting forever.

use std::io::{self, BufRead, Write};

/// Line-oriented console bound to an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output stream for rendering.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a numbered menu and read a choice in `1..=options.len()`.
    ///
    /// Anything else (blank, non-numeric, out of range) re-prompts.
    pub fn choose(&mut self, options: &[&str]) -> io::Result<Option<usize>> {
        writeln!(self.output, "\n")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, " {}. {option}", i + 1)?;
        }
        write!(self.output, "\nChoose one: ")?;
        self.output.flush()?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(Some(choice)),
                _ => {
                    tracing::debug!(input = %line.trim(), "Invalid menu choice");
                    write!(self.output, "Choose one: ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Print `prompt` and read one line, without its line terminator.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Print `prompt` and read an integer, re-prompting until one is given.
    pub fn prompt_int(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "'{}' is not a whole number.", line.trim())?,
            }
        }
    }

    /// Print `prompt` and read a line accepted by `parse`, re-prompting with
    /// `hint` until one is given.
    pub fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "{hint}")?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_choose_prints_numbered_options() {
        let mut c = console("2\n");
        assert_eq!(c.choose(&["Alpha", "Beta"]).unwrap(), Some(2));
        let out = output(c);
        assert!(out.contains(" 1. Alpha\n"));
        assert!(out.contains(" 2. Beta\n"));
        assert!(out.contains("Choose one: "));
    }

    #[test]
    fn test_choose_reprompts_on_invalid_input() {
        let mut c = console("0\nx\n\n7\n3\n");
        assert_eq!(c.choose(&["A", "B", "C"]).unwrap(), Some(3));
        assert_eq!(output(c).matches("Choose one: ").count(), 5);
    }

    #[test]
    fn test_choose_returns_none_at_end_of_input() {
        let mut c = console("9\n");
        assert_eq!(c.choose(&["A"]).unwrap(), None);
    }

    #[test]
    fn test_prompt_line_strips_terminator() {
        let mut c = console("The Crown\r\nnext");
        assert_eq!(c.prompt_line("Name: ").unwrap(), Some("The Crown".to_string()));
        assert_eq!(c.prompt_line("Name: ").unwrap(), Some("next".to_string()));
        assert_eq!(c.prompt_line("Name: ").unwrap(), None);
    }

    #[test]
    fn test_prompt_int_reprompts() {
        let mut c = console("three\n 3 \n");
        assert_eq!(c.prompt_int("Value: ").unwrap(), Some(3));
        assert!(output(c).contains("'three' is not a whole number."));
    }

    #[test]
    fn test_prompt_parsed_uses_hint() {
        let mut c = console("maybe\nyes\n");
        let got = c
            .prompt_parsed("? ", "Say yes.", |s| (s == "yes").then_some(true))
            .unwrap();
        assert_eq!(got, Some(true));
        assert!(output(c).contains("Say yes.\n"));
    }
}
