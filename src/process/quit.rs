use super::console::Console;
use std::io;

/// Print the farewell line that closes every session.
pub fn farewell(console: &mut Console<'_>) -> io::Result<()> {
    console.info("Bye bye!")?;
    console.flush()
}
