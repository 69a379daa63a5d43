use super::dnd::{DndItem, DndItemType};
use super::search::Searchable;

/// Common view of a metric or column as rendered by the panel
pub trait PanelItem: Searchable {
    /// Kind of drag item this entry produces
    const DND_TYPE: DndItemType;

    /// Identifier shown in the list (`column_name` / `metric_name`)
    fn name(&self) -> &str;

    fn verbose_name(&self) -> Option<&str>;

    fn description(&self) -> Option<&str>;

    /// SQL expression backing the item, if any
    fn expression(&self) -> Option<&str>;

    fn warning_markdown(&self) -> Option<&str>;

    fn certified_by(&self) -> Option<&str>;

    fn certification_details(&self) -> Option<&str>;

    fn is_certified(&self) -> bool {
        self.certified_by().is_some_and(|c| !c.trim().is_empty())
    }

    /// Multi-line hover text: verbose name, description and expression
    fn tooltip(&self) -> Option<String> {
        let mut lines = Vec::new();
        if let Some(verbose) = self.verbose_name().filter(|v| *v != self.name()) {
            lines.push(verbose.to_string());
        }
        if let Some(description) = self.description() {
            lines.push(description.to_string());
        }
        if let Some(expression) = self.expression() {
            lines.push(format!("SQL: {}", expression));
        }
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    /// Drag payload identifying this entry
    fn dnd_item(&self) -> DndItem {
        DndItem {
            kind: Self::DND_TYPE,
            name: self.name().to_string(),
        }
    }
}

/// Shorten a label to `max_chars` characters, ending it with an ellipsis.
/// Counts chars, not bytes.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = label.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
