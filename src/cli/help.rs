use crate::settings::Settings;
use crate::terminal::BoxWriter;

pub fn render(settings: &Settings, mut out: BoxWriter) -> String {
    let length = format!(
        "Password length (default: {}, or {} with --memorable)",
        settings.length, settings.memorable_length
    );
    let words = format!(
        "Generate N memorable words (3-7 letters) separated by spaces (default: {})",
        settings.words
    );

    out.top("password-generator")
        .center("Generates a secure password")
        .line("")
        .line("USAGE:")
        .line("  password-generator [OPTIONS]")
        .line("")
        .line("OPTIONS:")
        .opt("  -l, --length <N>", &length)
        .opt("  -m, --memorable", "Generate a memorable password")
        .opt("  -c, --non-memorable", "Generate a non-memorable password [default]")
        .opt("  -p, --pattern <REGEX>", "Pattern each character must match")
        .opt("  -i, --ignore-security-recommendations", "Generate even below 64 bits of estimated entropy")
        .opt("  -s, -sN, --words <N>", &words)
        .opt("      --seed <TEXT>", "Deterministic output from a seed (repeatable, not secret)")
        .opt("  -n, --number <N>", "How many to generate")
        .opt("  -b, --board", "Copy to clipboard instead of printing")
        .opt("  -q, --quiet", "Suppress warnings")
        .opt("      --verbose", "Log generation decisions to stderr")
        .opt("  -h, --help", "Display this help")
        .opt("  -v, --version", "Display version")
        .line("")
        .line("EXAMPLES:")
        .line("  password-generator -l 20")
        .line("  password-generator -m")
        .line("  password-generator -p '[a-f0-9]' -l 32")
        .line("  password-generator -s4")
        .bottom()
        .finish()
}

pub fn print(settings: &Settings) {
    print!("{}", render(settings, BoxWriter::for_terminal()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_mentions_every_flag() {
        let text = render(&Settings::default(), BoxWriter::new(74));
        for flag in [
            "--length", "--memorable", "--non-memorable", "--pattern",
            "--ignore-security-recommendations", "--words", "--seed", "--number",
            "--board", "--quiet", "--verbose", "--help", "--version",
        ] {
            assert!(text.contains(flag), "{flag}");
        }
        // The length description wraps at the flag column, so check each half.
        assert!(text.contains("(default: 16, or 20 with"));
        assert!(text.contains("--memorable)"));
    }
}
