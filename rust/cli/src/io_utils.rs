//! Interactive input for the human seat.

use std::io::{BufRead, Write};

use shortstack_engine::betting::{ActionProvider, DecisionContext, HumanDecision};
use shortstack_engine::errors::GameError;
use shortstack_engine::player::PlayerAction;

use crate::ui;
use crate::validation::{ParseResult, parse_player_action, parse_raise_amount};

/// Reads one trimmed line. `None` on EOF or a read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use shortstack_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  r 4 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("r 4".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// [`ActionProvider`] that prompts on `out` and reads answers from `input`.
///
/// Unparseable lines are reported and asked again; end of input counts as
/// quitting.
pub struct StdinPlayer<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> StdinPlayer<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    fn read_decision(&mut self) -> std::io::Result<HumanDecision> {
        loop {
            let Some(line) = read_stdin_line(self.input) else {
                return Ok(HumanDecision::Quit);
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => return Ok(HumanDecision::Act(action)),
                ParseResult::Quit => return Ok(HumanDecision::Quit),
                ParseResult::RaiseWithoutAmount => {
                    write!(self.out, "Raise by how much? > ")?;
                    self.out.flush()?;
                    let Some(amount) = read_stdin_line(self.input) else {
                        return Ok(HumanDecision::Quit);
                    };
                    match parse_raise_amount(&amount) {
                        Ok(x) => return Ok(HumanDecision::Act(PlayerAction::Raise(x))),
                        Err(msg) => writeln!(self.out, "{}", msg)?,
                    }
                }
                ParseResult::Invalid(msg) => writeln!(self.out, "{}", msg)?,
            }
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
    }
}

impl ActionProvider for StdinPlayer<'_> {
    fn decide(&mut self, ctx: &DecisionContext<'_>, rejected: Option<&GameError>) -> HumanDecision {
        let shown = ui::render_prompt(self.out, ctx, rejected);
        // a closed terminal cannot answer
        match shown.and_then(|()| self.read_decision()) {
            Ok(decision) => decision,
            Err(_) => HumanDecision::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortstack_engine::cards::parse_cards;
    use shortstack_engine::logger::Street;
    use shortstack_engine::player::Personality;
    use std::io::Cursor;

    fn ask(script: &str) -> (HumanDecision, String) {
        let hole = parse_cards("9♣ 9♦").unwrap();
        let ctx = DecisionContext {
            player: "You",
            street: Street::Preflop,
            hole: [hole[0], hole[1]],
            board: &[],
            personality: Personality::neutral(),
            bet_to_call: 2,
            stack: 50,
            pot: 3,
        };
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let decision = StdinPlayer::new(&mut input, &mut out).decide(&ctx, None);
        (decision, String::from_utf8(out).unwrap())
    }

    #[test]
    fn read_line_trims_and_stops_at_eof() {
        let mut cursor = Cursor::new("   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some(String::new()));
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn retries_after_garbage() {
        let (decision, shown) = ask("bet big\nc\n");
        assert_eq!(decision, HumanDecision::Act(PlayerAction::CheckCall));
        assert!(shown.contains("Unrecognized action 'bet'"));
    }

    #[test]
    fn bare_raise_reads_the_amount_next() {
        let (decision, shown) = ask("r\n7\n");
        assert_eq!(decision, HumanDecision::Act(PlayerAction::Raise(7)));
        assert!(shown.contains("Raise by how much?"));
    }

    #[test]
    fn eof_and_q_both_quit() {
        assert_eq!(ask("").0, HumanDecision::Quit);
        assert_eq!(ask("q\n").0, HumanDecision::Quit);
        assert_eq!(ask("r\n").0, HumanDecision::Quit);
    }
}
