use std::io::{self, Write};

use console::style;

pub fn set_color(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

pub fn error(message: &str) {
    let _ = writeln!(
        io::stderr(),
        "{} {}",
        style("error:").red().bold(),
        style(message).red()
    );
}

/// Writes query output to stdout in one call so a broken pipe surfaces as
/// an error instead of a panic.
pub fn print(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
