#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{nmea_content::FromFields, parsing::text_field, tokenizer::Fields};

/// TXT - Text Transmission
///
/// ```text
///         1  2  3  4
///         |  |  |  |
///  $--TXT,xx,xx,xx,c--c*hh<CR><LF>
/// ```
///
/// Fields 1 to 3 (total sentences, sentence number, text identifier) are not decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TXT {
    /// Message text
    pub txt_message: heapless::String<80>,
}

impl FromFields for TXT {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            txt_message: text_field(fields.get(4)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split;

    #[test]
    fn test_txt_fields() {
        let fields = split("$GPTXT,01,01,02,ANTSTATUS=OK*", '*', ',');
        assert_eq!(TXT::from_fields(&fields).txt_message, "ANTSTATUS=OK");

        let fields = split("$GPTXT,01,01,02*", '*', ',');
        assert_eq!(TXT::from_fields(&fields).txt_message, "");
    }
}
