//! Line-oriented console used by the interactive menus
//!
//! Reads answers from any `BufRead` and writes to any `Write`, so the menus
//! run the same against a terminal, a pipe, or an in-memory buffer.

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use crate::error::{RentalError, RentalResult};

pub struct Console<R, W> {
    input: R,
    output: W,
    hide_passwords: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout
    ///
    /// Passwords are read without echo only when stdin is a terminal.
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let hide_passwords = stdin.is_terminal();
        Self {
            input: stdin.lock(),
            output: io::stdout(),
            hide_passwords,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_passwords: false,
        }
    }

    /// Write text as-is
    pub fn print(&mut self, text: &str) -> RentalResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write text followed by a newline
    pub fn println(&mut self, text: &str) -> RentalResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompt and read one trimmed line
    ///
    /// Returns `InputClosed` once the input is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> RentalResult<String> {
        self.print(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RentalError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Prompt for a password, hiding the input on a terminal
    pub fn prompt_password(&mut self, prompt: &str) -> RentalResult<String> {
        if !self.hide_passwords {
            return self.prompt(prompt);
        }

        self.output.flush()?;
        match rpassword::prompt_password(prompt) {
            Ok(password) => Ok(password),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(RentalError::InputClosed),
            Err(e) => Err(RentalError::Io(format!("Failed to read password: {}", e))),
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
