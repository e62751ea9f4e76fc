//! Colored terminal messages.
use colored::Colorize;

const TICK: &str = "✓";

/// Print a success message.
pub fn success(msg: impl AsRef<str>) {
    let out = format!("{} {}", msg.as_ref().green(), TICK.green());
    println!("{}", out);
}
