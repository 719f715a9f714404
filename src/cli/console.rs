use std::io;

use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Line-oriented prompt/answer channel used by the menu loops.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write a line of output.
    pub async fn say(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    /// Write a prompt and read one answer, trimmed.
    /// Returns `None` once input is exhausted.
    pub async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Console::ask`], treating end of input as an empty answer.
    pub async fn ask_field(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.ask(prompt).await?.unwrap_or_default())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ask_trims_and_detects_eof() {
        let mut console = Console::new("  2 \r\nlast".as_bytes(), Vec::new());

        assert_eq!(console.ask("> ").await.unwrap(), Some("2".to_string()));
        assert_eq!(console.ask("> ").await.unwrap(), Some("last".to_string()));
        assert_eq!(console.ask("> ").await.unwrap(), None);
        assert_eq!(console.ask_field("> ").await.unwrap(), "");

        let (_, out) = console.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "> > > > ");
    }

    #[tokio::test]
    async fn test_say_appends_newline() {
        let mut console = Console::new(&b""[..], Vec::new());
        console.say("hello").await.unwrap();

        let (_, out) = console.into_inner();
        assert_eq!(out, b"hello\n");
    }
}
