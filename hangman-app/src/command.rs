/// One line of input during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(char),
    NewWord,
    Stats,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut chars = line.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if letter.is_alphabetic() {
                return Command::Guess(letter);
            }
        }

        match line.trim_start_matches(':').to_lowercase().as_str() {
            "new" | "n" => Command::NewWord,
            "stats" | "s" => Command::Stats,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters_are_guesses() {
        assert_eq!(Command::parse("a"), Command::Guess('a'));
        assert_eq!(Command::parse("  Q \n"), Command::Guess('Q'));
        // a lone 'n' is a guess, not a command
        assert_eq!(Command::parse("n"), Command::Guess('n'));
    }

    #[test]
    fn test_commands() {
        assert_eq!(Command::parse(":new"), Command::NewWord);
        assert_eq!(Command::parse(":n"), Command::NewWord);
        assert_eq!(Command::parse("stats"), Command::Stats);
        assert_eq!(Command::parse(":QUIT"), Command::Quit);
        assert_eq!(Command::parse("?"), Command::Help);
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(Command::parse("7"), Command::Unknown("7".to_string()));
        assert_eq!(Command::parse("apple"), Command::Unknown("apple".to_string()));
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }
}
