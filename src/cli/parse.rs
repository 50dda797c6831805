use super::CliFlags;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse `args`, skipping the program name in `args[0]`.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--verbose" => flags.verbose = true,
            "-b" | "--board" => flags.clipboard = true,
            "-m" | "--memorable" => flags.memorable = true,
            "-c" | "--non-memorable" => flags.non_memorable = true,
            "-i" | "--ignore-security-recommendations" => flags.ignore_security = true,
            "-l" | "--length" => flags.length = Some(number(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(number(args, &mut i)?),
            "--words" => flags.words = Some(number(args, &mut i)?),
            "-p" | "--pattern" => flags.pattern = Some(value(args, &mut i)?.to_string()),
            "--seed" => flags.seed = Some(value(args, &mut i)?.to_string()),
            "-s" => match args.get(i + 1) {
                Some(next) if is_digits(next) => {
                    flags.words = Some(number(args, &mut i)?);
                }
                _ => flags.words_default = true,
            },
            _ if arg.starts_with("-s") && is_digits(&arg[2..]) => {
                flags.words = Some(parse_number(&arg[2..])?);
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Consume the value following the flag at `*i`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    parse_number(value(args, i)?)
}

fn parse_number(s: &str) -> Result<usize, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("password-generator")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn length_and_modes() {
        let flags = parse(&args(&["-l", "24", "-m", "-i"])).unwrap();
        assert_eq!(flags.length, Some(24));
        assert!(flags.is_memorable());
        assert!(flags.ignore_security);
    }

    #[test]
    fn non_memorable_wins_regardless_of_order() {
        assert!(!parse(&args(&["-c", "-m"])).unwrap().is_memorable());
        assert!(!parse(&args(&["-m", "--non-memorable"])).unwrap().is_memorable());
    }

    #[test]
    fn pattern_forces_pattern_mode() {
        let flags = parse(&args(&["-m", "-p", "[a-f0-9]"])).unwrap();
        assert_eq!(flags.pattern.as_deref(), Some("[a-f0-9]"));
        assert!(!flags.is_memorable());
    }

    #[test]
    fn word_forms() {
        let bare = parse(&args(&["-s"])).unwrap();
        assert!(bare.words_default && bare.words.is_none());

        assert_eq!(parse(&args(&["-s5"])).unwrap().words, Some(5));
        assert_eq!(parse(&args(&["-s", "4"])).unwrap().words, Some(4));
        assert_eq!(parse(&args(&["--words", "6"])).unwrap().words, Some(6));

        let followed = parse(&args(&["-s", "-i"])).unwrap();
        assert!(followed.words_default && followed.ignore_security);
    }

    #[test]
    fn seed_and_number() {
        let flags = parse(&args(&["--seed", "abc", "-n", "3"])).unwrap();
        assert_eq!(flags.seed.as_deref(), Some("abc"));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["-l", "10.5"])),
            Err(ParseError::InvalidNumber("10.5".into()))
        );
        assert_eq!(
            parse(&args(&["-l", "-3"])),
            Err(ParseError::InvalidNumber("-3".into()))
        );
        assert_eq!(
            parse(&args(&["-p"])),
            Err(ParseError::MissingValue("-p".into()))
        );
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".into()))
        );
        assert_eq!(
            parse(&args(&["-sx"])),
            Err(ParseError::UnknownArg("-sx".into()))
        );
    }
}
