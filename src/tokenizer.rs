//! # Field Tokenizer
//!
//! Splits a validated sentence into a bounded list of fields.

use core::ops::Index;

/// Maximum number of fields produced for a single sentence.
pub const MAX_FIELDS: usize = 20;

/// Maximum number of characters kept per field.
pub const MAX_FIELD_LEN: usize = 50;

/// A single field, truncated to [`MAX_FIELD_LEN`] characters.
pub type Field = heapless::String<MAX_FIELD_LEN>;

/// The ordered fields of one sentence.
///
/// Indexing past the last produced field yields an empty field rather than panicking, since
/// receivers are free to omit trailing fields.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Fields {
    fields: heapless::Vec<Field, MAX_FIELDS>,
}

impl Fields {
    /// Returns the field at `index`, or `""` if the sentence had fewer fields.
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map(Field::as_str).unwrap_or("")
    }

    /// Number of fields actually produced.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields were produced.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the produced fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::as_str)
    }
}

impl Index<usize> for Fields {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        self.get(index)
    }
}

/// Splits `text` on `split`, dropping every occurrence of `remove`.
///
/// Each field keeps at most [`MAX_FIELD_LEN`] characters and the excess is silently dropped.
/// At most [`MAX_FIELDS`] fields are produced: once the last one is terminated by a
/// separator, the rest of the input is ignored.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::split;
///
/// let fields = split("$GPZDA,201530.00,04,07,2002,00,00*", '*', ',');
/// assert_eq!(fields.len(), 7);
/// assert_eq!(fields.get(0), "$GPZDA");
/// assert_eq!(fields.get(1), "201530.00");
/// assert_eq!(fields.get(6), "00");
/// assert_eq!(fields.get(7), "");
/// ```
pub fn split(text: &str, remove: char, split: char) -> Fields {
    let mut fields = heapless::Vec::<Field, MAX_FIELDS>::new();
    let mut current = Field::new();

    for c in text.chars() {
        if c == remove {
            continue;
        }

        if c == split {
            // Capacity is checked below, so this push always fits.
            let _ = fields.push(core::mem::take(&mut current));
            if fields.is_full() {
                return Fields { fields };
            }
        } else {
            // Overlong fields are truncated.
            let _ = current.push(c);
        }
    }

    let _ = fields.push(current);
    Fields { fields }
}
