use std::io::{self, BufRead, Write};

/// Seam for the yes/no gate in front of destructive operations.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// True only for the exact affirmative token. Empty input, whitespace, or
/// anything longer than a single `y` declines.
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Interactive confirmer: prints the prompt and blocks on one line of stdin.
/// There is no timeout; the session waits as long as the user does.
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(is_affirmative(&input))
    }
}

/// Non-interactive confirmer for `--yes` runs.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> io::Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_token_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative(" y\n"));

        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("Y es"));
    }

    #[test]
    fn assume_yes_always_confirms() {
        let mut confirmer = AssumeYes;
        assert!(confirmer.confirm("ignored").unwrap());
    }
}
