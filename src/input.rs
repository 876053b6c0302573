//! Trigger mapping from raw UI input to controller commands.
use crate::catalog::CategoryKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Generate,
    SelectCategory(CategoryKey),
}

/// Map a `KeyboardEvent.key` value. Enter/Space generate; 1/2/3 select the
/// categories in declaration order.
pub fn key_binding(key: &str) -> Option<Command> {
    match key {
        "Enter" | " " => Some(Command::Generate),
        "1" | "2" | "3" => {
            let slot = key.parse::<usize>().ok()?.checked_sub(1)?;
            CategoryKey::ALL.get(slot).copied().map(Command::SelectCategory)
        }
        _ => None,
    }
}
