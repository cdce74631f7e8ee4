//! Entity table formatting

use nlpcli_core::provider::EntityMention;

const ENTITY_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 10;
const SPAN_WIDTH: usize = 12;

/// Fixed-width listing of entity mentions
#[derive(Debug, Clone, Copy)]
pub struct EntityTable {
    show_positions: bool,
}

impl EntityTable {
    pub fn new(show_positions: bool) -> Self {
        Self { show_positions }
    }

    /// Header and separator lines
    pub fn header(&self) -> Vec<String> {
        let (entity, label) = ("-".repeat(ENTITY_WIDTH), "-".repeat(LABEL_WIDTH));
        if self.show_positions {
            vec![
                self.row("ENTITY", "LABEL", Some("SPAN")),
                self.row(&entity, &label, Some(&"-".repeat(SPAN_WIDTH))),
            ]
        } else {
            vec![self.row("ENTITY", "LABEL", None), self.row(&entity, &label, None)]
        }
    }

    /// One row; newlines become spaces and the text is cut to 40 characters
    pub fn format(&self, mention: &EntityMention) -> String {
        let text: String = mention
            .text
            .replace('\n', " ")
            .chars()
            .take(ENTITY_WIDTH)
            .collect();
        let span = format!("{}-{}", mention.start, mention.end);
        let span = self.show_positions.then_some(span.as_str());
        self.row(&text, mention.label.as_str(), span)
    }

    fn row(&self, entity: &str, label: &str, span: Option<&str>) -> String {
        let line = match span {
            Some(span) => format!(
                "{entity:ENTITY_WIDTH$}  {label:LABEL_WIDTH$}  {span:SPAN_WIDTH$}"
            ),
            None => format!("{entity:ENTITY_WIDTH$}  {label:LABEL_WIDTH$}"),
        };
        line.trim_end().to_string()
    }
}
