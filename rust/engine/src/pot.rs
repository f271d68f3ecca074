use crate::errors::GameError;

/// Splits `pot` between `winners`.
///
/// Every winner gets `pot / k`; the `pot % k` leftover chips go one each to
/// the first winners in alphabetical name order. Awards are returned in that
/// same alphabetical order and always sum to `pot`.
///
/// # Errors
///
/// [`GameError::NoWinners`] when `winners` is empty.
///
/// # Examples
///
/// ```
/// use shortstack_engine::pot::settle;
///
/// let winners = ["Cid".to_string(), "Ana".to_string(), "Bob".to_string()];
/// let awards = settle(10, &winners).unwrap();
/// assert_eq!(
///     awards,
///     vec![("Ana".to_string(), 4), ("Bob".to_string(), 3), ("Cid".to_string(), 3)]
/// );
/// ```
pub fn settle(pot: u32, winners: &[String]) -> Result<Vec<(String, u32)>, GameError> {
    if winners.is_empty() {
        return Err(GameError::NoWinners);
    }
    let mut ordered: Vec<&String> = winners.iter().collect();
    ordered.sort();
    ordered.dedup();

    let k = ordered.len() as u32;
    let base = pot / k;
    let remainder = (pot % k) as usize;
    Ok(ordered
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let extra = u32::from(i < remainder);
            (name.clone(), base + extra)
        })
        .collect())
}
