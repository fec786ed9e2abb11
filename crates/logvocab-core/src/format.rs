//! Event string assembly shared by every formatter.

use std::fmt::{Display, Write};

use crate::kind::EventKind;

/// Incrementally renders `<kind>:<field>[,<field>...][:<item>,<item>...]`.
#[derive(Debug)]
pub(crate) struct EventWriter {
    buf: String,
    fields: usize,
}

impl EventWriter {
    /// Starts an event with the kind literal and its `:` separator.
    pub(crate) fn new(kind: EventKind) -> Self {
        let mut buf = String::with_capacity(64);
        buf.push_str(kind.as_str());
        buf.push(':');
        Self { buf, fields: 0 }
    }

    /// Appends a scalar field, comma-separated from the previous one.
    pub(crate) fn field(mut self, value: impl Display) -> Self {
        if self.fields > 0 {
            self.buf.push(',');
        }
        self.push(value);
        self
    }

    /// Appends a field preceded by `, ` instead of `,`.
    pub(crate) fn spaced_field(mut self, value: impl Display) -> Self {
        self.buf.push_str(", ");
        self.push(value);
        self
    }

    /// Appends the items as one field, joined with `,`.
    ///
    /// The separator before the field is written even when `items` is empty.
    pub(crate) fn joined<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if self.fields > 0 {
            self.buf.push(',');
        }
        self.push_list(items);
        self.fields += 1;
        self
    }

    /// Appends `:` followed by the items joined with `,`.
    pub(crate) fn sublist<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.buf.push(':');
        self.push_list(items);
        self
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }

    fn push(&mut self, value: impl Display) {
        // Writing into a String cannot fail.
        let _ = write!(self.buf, "{value}");
        self.fields += 1;
    }

    fn push_list<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            let _ = write!(self.buf, "{item}");
        }
    }
}
