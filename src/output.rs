use std::io::{self, Stderr, Stdout, Write};

/// Prefix of the single diagnostic line written on failure
const ERROR_PREFIX: &str = "Error in session-start hook: ";

/// The hook's two output streams.
///
/// Everything written goes through `&str`, so bytes on the wire are always
/// UTF-8 whatever the platform locale or console code page says.
pub struct Streams<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Streams<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Streams::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Streams<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Streams { out, err }
    }

    /// Write one complete line to stdout in a single call
    pub fn emit(&mut self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.out.write_all(buf.as_bytes())?;
        self.out.flush()
    }

    /// Report a fatal error as one line on stderr
    pub fn report(&mut self, error: &anyhow::Error) {
        let message = format!("{:#}", error).replace('\n', " ");
        // Nowhere left to report a failing stderr
        let _ = writeln!(self.err, "{}{}", ERROR_PREFIX, message);
        let _ = self.err.flush();
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
