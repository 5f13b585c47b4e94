//! Chat messages shared by the handler and its triggers.

use stash_core::RegistryKey;

use crate::feedback::ChatMessage;
use crate::tally::TallyEntry;
use crate::transfer::{TransferDirection, TransferRecord};

/// Headline sent before the per-stack transfer lines.
pub fn transfer_begin(direction: TransferDirection) -> ChatMessage {
    let title = match direction {
        TransferDirection::Deposit => "Depositing",
        TransferDirection::Take => "Taking",
    };
    ChatMessage::plain(format!("§7{title}§r"))
}

/// `-N` (red) for deposits, `+N` (green) for takes, followed by the item name.
pub fn transfer_line(record: &TransferRecord, direction: TransferDirection) -> ChatMessage {
    let (color, sign) = match direction {
        TransferDirection::Deposit => ("§c", "-"),
        TransferDirection::Take => ("§2", "+"),
    };
    ChatMessage::new()
        .text(format!("{color}{sign}{}x§r ", record.amount))
        .translate(record.translation_key.clone())
}

/// Number of containers found in a search range.
pub fn container_count(count: usize) -> ChatMessage {
    ChatMessage::new()
        .text("§7Linked§r ")
        .text(format!("§3{count}§r "))
        .text("§7Containers§r")
}

/// Header of a tally listing.
pub fn tally_header() -> ChatMessage {
    ChatMessage::plain("§7Contents:§r")
}

/// One tally entry.
pub fn tally_line(entry: &TallyEntry) -> ChatMessage {
    ChatMessage::new()
        .text("§7 - ")
        .translate(entry.type_id.translation_key("item"))
        .text(format!("§r§3 x{}§r", entry.amount))
}

/// Confirmation after a sort.
pub fn sorted() -> ChatMessage {
    ChatMessage::new()
        .text("§7")
        .translate("mypack:sorted_container")
        .text("§r")
}

/// Confirmation after a compaction.
pub fn compacted() -> ChatMessage {
    ChatMessage::plain("§7Compacted Container§r")
}

/// A rod mode was selected.
pub fn mode_changed(display_name: &str) -> ChatMessage {
    ChatMessage::new()
        .text("Set Mode §3'")
        .translate(display_name)
        .text("'§r")
}

/// First half of a swap: a container was selected.
pub fn swap_selected(block_type: &RegistryKey) -> ChatMessage {
    ChatMessage::new()
        .text("§7Swapping: Selected §r§3'")
        .translate(block_type.translation_key("tile"))
        .text("'§r")
}

/// Second half of a swap.
pub fn swapped(first: &RegistryKey, second: &RegistryKey) -> ChatMessage {
    ChatMessage::new()
        .text("§7Swapped §3'")
        .translate(first.translation_key("tile"))
        .text("'§r§7 <-> §3'")
        .translate(second.translation_key("tile"))
        .text("'§r")
}

/// Soft failure reported to chat.
pub fn error(text: impl std::fmt::Display) -> ChatMessage {
    ChatMessage::plain(format!("error: {text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_lines_are_signed() {
        let record = TransferRecord {
            type_id: RegistryKey::minecraft("iron_ingot"),
            translation_key: "item.iron_ingot.name".into(),
            amount: 40,
        };
        assert_eq!(
            transfer_line(&record, TransferDirection::Deposit).to_plain(),
            "-40x item.iron_ingot.name"
        );
        assert_eq!(
            transfer_line(&record, TransferDirection::Take).to_plain(),
            "+40x item.iron_ingot.name"
        );
    }

    #[test]
    fn count_and_tally_lines() {
        assert_eq!(container_count(3).to_plain(), "Linked 3 Containers");
        let entry = TallyEntry {
            type_id: RegistryKey::minecraft("stone"),
            amount: 12,
        };
        assert_eq!(tally_line(&entry).to_plain(), " - item.stone.name x12");
    }
}
