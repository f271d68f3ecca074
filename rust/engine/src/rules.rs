use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// Validates an action chosen by the human seat.
///
/// Nothing is downgraded here: an unaffordable action is returned as an error
/// so the caller can ask for a new decision.
///
/// # Errors
///
/// - [`GameError::InvalidAmount`] - a raise of zero chips
/// - [`GameError::InsufficientChips`] - the call, or the call plus the raise,
///   exceeds the stack
///
/// # Examples
///
/// ```
/// use shortstack_engine::errors::GameError;
/// use shortstack_engine::player::PlayerAction;
/// use shortstack_engine::rules::validate_human;
///
/// assert_eq!(validate_human(50, 10, PlayerAction::Raise(40)), Ok(PlayerAction::Raise(40)));
/// assert!(matches!(
///     validate_human(50, 10, PlayerAction::Raise(41)),
///     Err(GameError::InsufficientChips { needed: 51, available: 50 })
/// ));
/// assert!(matches!(
///     validate_human(5, 10, PlayerAction::CheckCall),
///     Err(GameError::InsufficientChips { .. })
/// ));
/// ```
pub fn validate_human(stack: u32, bet_to_call: u32, action: A) -> Result<A, GameError> {
    match action {
        A::Fold => Ok(A::Fold),
        A::CheckCall => {
            if bet_to_call > stack {
                Err(GameError::InsufficientChips {
                    needed: bet_to_call,
                    available: stack,
                })
            } else {
                Ok(A::CheckCall)
            }
        }
        A::Raise(0) => Err(GameError::InvalidAmount { amount: 0 }),
        A::Raise(amount) => {
            let needed = bet_to_call.saturating_add(amount);
            if needed > stack {
                Err(GameError::InsufficientChips {
                    needed,
                    available: stack,
                })
            } else {
                Ok(A::Raise(amount))
            }
        }
    }
}

/// Makes a bot decision affordable.
///
/// An unaffordable raise becomes a call when the stack covers the call and a
/// fold otherwise; an unaffordable call becomes a fold. A zero raise is a call.
/// The flag is `true` when the action was changed.
pub fn downgrade_bot(stack: u32, bet_to_call: u32, action: A) -> (A, bool) {
    let can_call = stack >= bet_to_call;
    match action {
        A::Fold => (A::Fold, false),
        A::Raise(0) if can_call => (A::CheckCall, true),
        A::Raise(amount) if stack >= bet_to_call.saturating_add(amount) => (A::Raise(amount), false),
        A::Raise(_) if can_call => (A::CheckCall, true),
        A::CheckCall if can_call => (A::CheckCall, false),
        _ => (A::Fold, true),
    }
}
