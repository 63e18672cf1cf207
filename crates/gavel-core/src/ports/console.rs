//! Console port - 対話ループの入出力境界。

use std::io;

/// Blocking console capability used by the interactive session.
///
/// The session loop talks to the operator only through this trait, so a whole
/// session can be driven in tests with scripted input and captured output.
pub trait Console {
    /// Write `text` as-is; no trailing newline is added.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its trailing newline. `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}
