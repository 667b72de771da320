use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// Print a section banner framed by `=` rules.
pub fn banner(title: &str) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("{title}");
    println!("{}\n", "=".repeat(RULE_WIDTH));
}

pub fn ok(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn fail(message: &str) {
    println!("{} {}", "✗".red(), message);
}
