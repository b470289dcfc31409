use console::Style;

/// Style presets for consistent terminal output
pub struct Styles;

impl Styles {
    /// Error message style (red)
    pub fn error() -> Style {
        Style::new().red()
    }

    /// Warning message style (yellow)
    pub fn warning() -> Style {
        Style::new().yellow()
    }

    /// Success message style (green)
    pub fn success() -> Style {
        Style::new().green()
    }

    /// Info message style (cyan)
    pub fn info() -> Style {
        Style::new().cyan()
    }

    pub fn bold() -> Style {
        Style::new().bold()
    }

    /// Header style for section titles
    pub fn header() -> Style {
        Style::new().magenta().bold()
    }

    /// Style for the rewritten sentence itself
    pub fn result() -> Style {
        Style::new().white().bold()
    }
}

/// Print a styled error message to stderr
pub fn error(message: &str) {
    eprintln!("{}", Styles::error().apply_to(message));
}

/// Print a styled warning message to stderr
pub fn warning(message: &str) {
    eprintln!("{}", Styles::warning().apply_to(message));
}

/// Print a styled success message
pub fn success(message: &str) {
    println!("{}", Styles::success().apply_to(message));
}

/// Print a styled info message
pub fn info(message: &str) {
    println!("{}", Styles::info().apply_to(message));
}

/// Print a styled section header
pub fn header(message: &str) {
    println!("{}", Styles::header().apply_to(message));
}

/// Print a message with a custom style
pub fn styled(style: &Style, message: &str) {
    println!("{}", style.apply_to(message));
}
