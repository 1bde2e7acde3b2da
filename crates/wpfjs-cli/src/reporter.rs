use colored::Colorize;

/// Formats fatal errors for the terminal.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// `error: <message>` followed by one `caused by:` line per cause.
    pub fn format_error(&self, error: &anyhow::Error) -> String {
        let mut output = self.format_label("error", true);
        output.push_str(": ");
        output.push_str(&error.to_string());

        for cause in error.chain().skip(1) {
            output.push_str("\n  ");
            output.push_str(&self.format_label("caused by", false));
            output.push_str(": ");
            output.push_str(&cause.to_string());
        }
        output
    }

    fn format_label(&self, label: &str, primary: bool) -> String {
        if !self.color {
            return label.to_string();
        }
        if primary {
            label.red().bold().to_string()
        } else {
            label.yellow().to_string()
        }
    }
}
