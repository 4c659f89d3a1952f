use super::render::format_message;
use dogear::api::CmdMessage;
use dogear::error::Result;
use dogear::system::{strip_line_ending, Prompter};
use std::io::{self, BufRead, Write};

/// Asks on stdout and reads answers from stdin, one line per question.
pub struct TerminalPrompter<R: BufRead> {
    input: R,
}

impl TerminalPrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> TerminalPrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Prompter for TerminalPrompter<R> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush()?;

        // Raw bytes: an answer that is not UTF-8 is just a decline
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            // keep the shell prompt off the question line
            writeln!(stdout)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line).into_owned();
        Ok(Some(strip_line_ending(line)))
    }

    fn tell(&mut self, message: &CmdMessage) {
        println!("{}", format_message(message));
    }
}
