use crate::classify::LineClass;
use crate::model::{Field, Record};

/// A record that is still receiving lines.
///
/// Address lines are kept as fragments and joined once on close.
#[derive(Debug, Default)]
struct OpenRecord {
    record: Record,
    address: Vec<String>,
}

impl OpenRecord {
    fn close(mut self) -> Record {
        self.record.address = self.address.join(" ");
        self.record
    }
}

/// Line-by-line state machine that cuts a classified line stream into records.
///
/// A new record starts when a Name label arrives and the open record already
/// has a name. Unlabeled lines fill Company first, then accumulate into
/// Address until the next labeled line.
#[derive(Debug, Default)]
pub struct Segmenter {
    current: Option<OpenRecord>,
    inside_address: bool,
    closed: Vec<Record>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next classified line.
    pub fn push(&mut self, line: &LineClass<'_>) {
        match *line {
            LineClass::PageNumber => {}
            LineClass::Labeled { field, value } => self.push_labeled(field, value),
            LineClass::Plain { text } => self.push_plain(text),
        }
    }

    fn push_labeled(&mut self, field: Field, value: &str) {
        let starts_new = match &self.current {
            None => true,
            Some(open) => field == Field::Name && !open.record.name.is_empty(),
        };
        if starts_new {
            self.close_current();
            self.current = Some(OpenRecord::default());
        }

        self.inside_address = false;
        if let Some(open) = self.current.as_mut() {
            if field == Field::Address {
                open.address = vec![value.to_string()];
            } else {
                *open.record.get_mut(field) = value.to_string();
            }
        }
    }

    fn push_plain(&mut self, text: &str) {
        let Some(open) = self.current.as_mut() else {
            log::trace!("ignoring preamble line {text:?}");
            return;
        };

        if !self.inside_address && open.record.company.is_empty() {
            if !text.is_empty() {
                open.record.company = text.to_string();
            }
            return;
        }

        self.inside_address = true;
        if !text.is_empty() {
            open.address.push(text.to_string());
        }
    }

    fn close_current(&mut self) {
        let Some(open) = self.current.take() else {
            return;
        };
        let record = open.close();
        if record.name.is_empty() {
            log::debug!("dropping record without a name: {record:?}");
            return;
        }
        log::debug!("closed record for {:?}", record.name);
        self.closed.push(record);
    }

    /// Close the open record, if any, and return every record in order.
    pub fn finish(mut self) -> Vec<Record> {
        self.close_current();
        self.closed
    }
}

/// Segment a full classified line stream into contact records.
pub fn segment(lines: &[LineClass<'_>]) -> Vec<Record> {
    let mut segmenter = Segmenter::new();
    for line in lines {
        segmenter.push(line);
    }
    segmenter.finish()
}
