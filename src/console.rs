use std::fmt::Display;

/// Line-oriented output sink shared by every snippet.
///
/// Lines are always captured in order; when `echo` is set they are also
/// written to stdout as they arrive.
#[derive(Debug, Default)]
pub struct Console {
    lines: Vec<String>,
    echo: bool,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echoing() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    pub fn println(&mut self, line: impl Display) {
        let line = line.to_string();
        if self.echo {
            println!("{line}");
        }
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
