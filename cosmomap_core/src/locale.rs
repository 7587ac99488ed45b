//! UI strings and kind labels.
//!
//! Only the chrome is localized. Catalog names and descriptions are shown as
//! authored in the data file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::BodyKind;

/// Display language of the chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese
    #[default]
    Ja,
    /// English
    En,
}

/// Fixed UI text for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct UiStrings {
    /// Page title
    pub title: &'static str,
    /// Line under the title
    pub subtitle: &'static str,
    /// Loading screen text
    pub loading: &'static str,
    /// Error screen heading
    pub error_title: &'static str,
    /// Error screen explanation
    pub error_body: &'static str,
    /// Error screen retry button
    pub retry: &'static str,
    /// Accessible label of the detail close button
    pub close_label: &'static str,
    /// Detail view footnote
    pub coming_soon: &'static str,
    /// Page footer
    pub footer: &'static str,
}

static JA: UiStrings = UiStrings {
    title: "CosmoMap",
    subtitle: "宇宙の天体をクリックして詳細を探索しよう",
    loading: "宇宙地図を読み込んでいます...",
    error_title: "エラーが発生しました",
    error_body: "宇宙地図の表示中に問題が発生しました。",
    retry: "もう一度試す",
    close_label: "モーダルを閉じる",
    coming_soon: "※ より詳しい情報は今後追加予定です",
    footer: "Powered by NASA Public Domain Images",
};

static EN: UiStrings = UiStrings {
    title: "CosmoMap",
    subtitle: "Click a body in space to explore its details",
    loading: "Loading the space map...",
    error_title: "Something went wrong",
    error_body: "A problem occurred while showing the space map.",
    retry: "Try again",
    close_label: "Close details",
    coming_soon: "* More detailed information is coming soon",
    footer: "Powered by NASA Public Domain Images",
};

impl Locale {
    /// Every supported locale.
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    /// Badge text for a body kind.
    pub fn kind_label(self, kind: BodyKind) -> &'static str {
        match (self, kind) {
            (Locale::Ja, BodyKind::Star) => "恒星",
            (Locale::Ja, BodyKind::Planet) => "惑星",
            (Locale::Ja, BodyKind::Satellite) => "衛星",
            (Locale::Ja, BodyKind::Asteroid) => "小惑星",
            (Locale::En, BodyKind::Star) => "Star",
            (Locale::En, BodyKind::Planet) => "Planet",
            (Locale::En, BodyKind::Satellite) => "Satellite",
            (Locale::En, BodyKind::Asteroid) => "Asteroid",
        }
    }

    /// Chrome strings.
    pub fn strings(self) -> &'static UiStrings {
        match self {
            Locale::Ja => &JA,
            Locale::En => &EN,
        }
    }

    /// Accessible label of a marker.
    pub fn marker_label(self, name: &str) -> String {
        match self {
            Locale::Ja => format!("{name}の詳細を表示"),
            Locale::En => format!("Show details for {name}"),
        }
    }

    /// Value for `<html lang>`.
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.html_lang())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase().replace('_', "-");
        let primary = tag.split('-').next().unwrap_or_default();
        match primary {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_labels_are_total() {
        for locale in Locale::ALL {
            for kind in BodyKind::ALL {
                assert!(!locale.kind_label(kind).is_empty());
            }
        }
        assert_eq!(Locale::Ja.kind_label(BodyKind::Star), "恒星");
        assert_eq!(Locale::En.kind_label(BodyKind::Satellite), "Satellite");
    }

    #[test]
    fn strings_differ_per_locale() {
        assert_eq!(Locale::Ja.strings().retry, "もう一度試す");
        assert_eq!(Locale::En.strings().retry, "Try again");
        assert_eq!(Locale::Ja.strings().title, Locale::En.strings().title);
    }

    #[test]
    fn marker_labels() {
        assert_eq!(Locale::Ja.marker_label("火星"), "火星の詳細を表示");
        assert_eq!(Locale::En.marker_label("火星"), "Show details for 火星");
    }

    #[test]
    fn parses_language_tags() {
        assert_eq!("ja".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!("ja-JP".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!("en_US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(ConfigError::UnknownLocale("fr".into()))
        );
    }
}
