use super::definition::{CUSTOM_OPTION, SEARCH_OPTION};
use crate::adapters::GifQuery;
use serenity::model::application::CommandDataOption;

/// Options supplied with one `/gif` invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GifOptions {
    pub search: Option<String>,
    pub custom: Option<String>,
}

impl GifOptions {
    pub fn new(search: Option<&str>, custom: Option<&str>) -> Self {
        Self {
            search: search.map(str::to_string),
            custom: custom.map(str::to_string),
        }
    }

    /// Read the string options from raw interaction data
    ///
    /// Unknown options and non-string values are ignored.
    pub fn from_data_options(options: &[CommandDataOption]) -> Self {
        let string_option = |name: &str| {
            options
                .iter()
                .find(|option| option.name == name)
                .and_then(|option| option.value.as_str())
                .map(str::to_string)
        };

        Self {
            search: string_option(SEARCH_OPTION),
            custom: string_option(CUSTOM_OPTION),
        }
    }

    /// The text to look up: `search` wins over `custom`, empty values are skipped
    ///
    /// A category from `custom` goes through the same free-text search as
    /// `search` does.
    pub fn query_text(&self) -> &str {
        [self.search.as_deref(), self.custom.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .unwrap_or("")
    }

    pub fn query(&self) -> GifQuery {
        GifQuery::from_text(self.query_text())
    }
}
