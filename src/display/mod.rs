//! English text for log entries, scores, and the turn banner.
//!
//! The engine emits structured records only; adapters that want text call
//! into here.

use crate::core::{Actor, GameState, GameStatus, LogEntry};
use crate::primality::is_prime;

/// Name shown to the person at the keyboard.
#[must_use]
pub fn actor_name(actor: Actor) -> &'static str {
    match actor {
        Actor::Human => "Player",
        Actor::Opponent => "Computer",
    }
}

/// Lines describing one move.
///
/// Opponent moves get an extra leading line naming the chosen number,
/// since the human did not pick it.
///
/// ```
/// use prime_race::core::{Actor, LogEntry};
/// use prime_race::display::describe_entry;
///
/// let entry = LogEntry {
///     actor: Actor::Opponent,
///     amount_added: 4,
///     resulting_sum: 7,
///     scored: true,
///     points_awarded: 7,
/// };
/// assert_eq!(
///     describe_entry(&entry),
///     vec![
///         "Computer chose 4".to_string(),
///         "Computer made the sum 7 and scored 7 points (prime)!".to_string(),
///     ]
/// );
/// ```
#[must_use]
pub fn describe_entry(entry: &LogEntry) -> Vec<String> {
    let name = actor_name(entry.actor);
    let mut lines = Vec::with_capacity(2);

    if entry.actor == Actor::Opponent {
        lines.push(format!("{name} chose {}", entry.amount_added));
    }

    if entry.scored {
        lines.push(format!(
            "{name} made the sum {} and scored {} points (prime)!",
            entry.resulting_sum, entry.points_awarded
        ));
    } else {
        lines.push(format!("{name} made the sum {} (not prime)", entry.resulting_sum));
    }

    lines
}

/// Every line of the game log, oldest first.
#[must_use]
pub fn describe_log(state: &GameState) -> Vec<String> {
    state.log.iter().flat_map(describe_entry).collect()
}

/// Turn indicator, or the winner banner once the game is over.
#[must_use]
pub fn status_line(state: &GameState) -> String {
    match state.status {
        GameStatus::Finished { winner } => format!("Game over! {} wins!", actor_name(winner)),
        GameStatus::InProgress => match state.active_actor {
            Actor::Human => "Your turn".to_string(),
            Actor::Opponent => format!("{}'s turn", actor_name(Actor::Opponent)),
        },
    }
}

/// The running sum labelled with whether it is prime.
///
/// ```
/// use prime_race::core::GameState;
/// use prime_race::display::sum_line;
///
/// assert_eq!(sum_line(&GameState::new()), "Sum: 0 (not prime)");
/// ```
#[must_use]
pub fn sum_line(state: &GameState) -> String {
    let label = if is_prime(i64::from(state.current_sum)) { "prime!" } else { "not prime" };
    format!("Sum: {} ({label})", state.current_sum)
}

/// One-line scoreboard. Pair with `sum_line` for the running sum.
#[must_use]
pub fn scoreboard(state: &GameState) -> String {
    format!(
        "{}: {} | {}: {}",
        actor_name(Actor::Human),
        state.score(Actor::Human),
        actor_name(Actor::Opponent),
        state.score(Actor::Opponent),
    )
}
