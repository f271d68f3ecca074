//! Parsing of the human seat's typed actions.

use shortstack_engine::player::PlayerAction;

/// What a line of input asked for.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `r` or `raise` without an amount; the amount is asked for separately
    RaiseWithoutAmount,
    Quit,
    /// Input that cannot be turned into an action, with the reason
    Invalid(String),
}

/// Parses one line of human input (case-insensitive):
///
/// - `c`, `call`, `check` → check or call
/// - `r N`, `raise N` → raise by `N` over the current bet
/// - `f`, `fold` → fold
/// - `q`, `quit` → leave the table
///
/// # Example
///
/// ```rust
/// use shortstack_cli::validation::{parse_player_action, ParseResult};
/// use shortstack_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
/// assert_eq!(parse_player_action("r 6"), ParseResult::Action(PlayerAction::Raise(6)));
/// assert_eq!(parse_player_action("Q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    if parts.len() > 2 {
        return ParseResult::Invalid(format!("Too many words in '{}'", input));
    }

    match (verb, parts.get(1)) {
        ("q" | "quit", None) => ParseResult::Quit,
        ("f" | "fold", None) => ParseResult::Action(PlayerAction::Fold),
        ("c" | "call" | "check", None) => ParseResult::Action(PlayerAction::CheckCall),
        ("r" | "raise", None) => ParseResult::RaiseWithoutAmount,
        ("r" | "raise", Some(amount)) => match parse_raise_amount(amount) {
            Ok(x) => ParseResult::Action(PlayerAction::Raise(x)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        ("q" | "quit" | "f" | "fold" | "c" | "call" | "check", Some(_)) => {
            ParseResult::Invalid(format!("'{}' takes no amount", verb))
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: c (check/call), r <amount>, f (fold), q (quit)",
            verb
        )),
    }
}

/// Parses a raise amount: a positive whole number of chips.
pub fn parse_raise_amount(input: &str) -> Result<u32, String> {
    match input.trim().parse::<u32>() {
        Ok(0) => Err("Raise amount must be positive".to_string()),
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Invalid raise amount '{}'", input.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_forms_match() {
        for (short, long) in [("c", "call"), ("f", "fold"), ("q", "quit"), ("r 4", "raise 4")] {
            assert_eq!(parse_player_action(short), parse_player_action(long));
        }
        assert_eq!(
            parse_player_action("check"),
            ParseResult::Action(PlayerAction::CheckCall)
        );
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert_eq!(
            parse_player_action("  RAISE   12 "),
            ParseResult::Action(PlayerAction::Raise(12))
        );
    }

    #[test]
    fn bare_raise_asks_for_amount() {
        assert_eq!(parse_player_action("r"), ParseResult::RaiseWithoutAmount);
    }

    #[test]
    fn rejects_bad_amounts() {
        for input in ["r 0", "raise -3", "raise lots", "r 2.5"] {
            assert!(
                matches!(parse_player_action(input), ParseResult::Invalid(_)),
                "{input}"
            );
        }
    }

    #[test]
    fn rejects_unknown_and_extra_words() {
        assert!(matches!(parse_player_action(""), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("allin"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("fold 3"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("r 3 4"), ParseResult::Invalid(_)));
    }
}
