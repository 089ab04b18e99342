//! ANSI color palette for terminal output.

#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub red: &'static str,
    pub blue: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        red: "\x1b[31m",
        blue: "\x1b[34m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        red: "",
        blue: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}

/// Print `error: <msg>` to stderr and exit with status 1.
pub fn fail(msg: impl std::fmt::Display, colors: Colors) -> ! {
    eprintln!("{}error{}: {}", colors.red, colors.reset, msg);
    std::process::exit(1);
}
