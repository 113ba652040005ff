use regex::Regex;
use std::sync::OnceLock;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        fn $name() -> &'static Regex {
            static PATTERN: OnceLock<Regex> = OnceLock::new();
            PATTERN.get_or_init(|| Regex::new($re).expect("invalid paste pattern"))
        }
    };
}

pattern!(team_header_re, r"^===\s+\[([^\]]*)\]\s+(.*?)\s+===$");
pattern!(gender_re, r"\(([FM])\)");
pattern!(item_re, r"@\s?(.*)$");
pattern!(name_re, r"^[^()=@]{2,}");
pattern!(nickname_re, r"^([^()=@]+)\s+\(([^()=@]{2,})\)");
pattern!(ability_re, r"^Ability:\s?(.*)$");
pattern!(level_re, r"^Level:\s?([0-9]{1,3})$");
pattern!(shiny_re, r"^(?i:Shiny):\s?(Yes|No)$");
pattern!(happiness_re, r"^Happiness:\s?([0-9]{1,3})$");
pattern!(nature_re, r"^(.*)\s+Nature$");
pattern!(stats_re, r"^((?i:[EI]Vs)):\s?(.*)$");
pattern!(move_re, r"^[-~]\s?(.*)$");

/// Names and tags extracted from a `=== [format] folder/name ===` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamHeader<'a> {
    pub format: &'a str,
    pub folder: &'a str,
    pub name: &'a str,
}

impl<'a> TeamHeader<'a> {
    /// Parses a team header line, returning `None` when the line is not one
    ///
    /// ```
    /// use teampaste::text::TeamHeader;
    /// let header = TeamHeader::parse("=== [gen7] Folder 1/Example Team ===").unwrap();
    /// assert_eq!(header.format, "gen7");
    /// assert_eq!(header.folder, "Folder 1");
    /// assert_eq!(header.name, "Example Team");
    /// assert!(TeamHeader::parse("======").is_none());
    /// ```
    pub fn parse(line: &'a str) -> Option<TeamHeader<'a>> {
        let caps = team_header_re().captures(line)?;
        let format = caps.get(1)?.as_str();
        let rest = caps.get(2)?.as_str();

        let mut segments = rest.split('/');
        let header = match (segments.next(), segments.next(), segments.next()) {
            (Some(folder), Some(name), None) => TeamHeader {
                format,
                folder,
                name,
            },
            _ => TeamHeader {
                format,
                folder: "",
                name: rest,
            },
        };

        Some(header)
    }
}

/// What can be found on the first line of a pokemon block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLine<'a> {
    pub name: &'a str,
    pub nickname: &'a str,
    pub gender: &'a str,
    pub item: &'a str,
}

impl<'a> NameLine<'a> {
    /// Parses the first line of a pokemon block. `None` is returned when no
    /// name can be found.
    ///
    /// ```
    /// use teampaste::text::NameLine;
    /// let line = NameLine::parse("Smogon (Koffing) (F) @ Eviolite").unwrap();
    /// assert_eq!(line.nickname, "Smogon");
    /// assert_eq!(line.name, "Koffing");
    /// assert_eq!(line.gender, "F");
    /// assert_eq!(line.item, "Eviolite");
    /// ```
    pub fn parse(line: &'a str) -> Option<NameLine<'a>> {
        let (nickname, name) = if let Some(caps) = nickname_re().captures(line) {
            (caps.get(1)?.as_str().trim(), caps.get(2)?.as_str().trim())
        } else {
            ("", name_re().find(line)?.as_str().trim())
        };

        let gender = gender_re()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map_or("", |x| x.as_str());

        let item = item_re()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map_or("", |x| x.as_str().trim());

        Some(NameLine {
            name,
            nickname,
            gender,
            item,
        })
    }
}

/// Whether a stat line lists effort or individual values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLineKind {
    Effort,
    Individual,
}

/// A classified attribute line from a pokemon block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Ability(&'a str),
    Level(&'a str),
    Shiny(bool),
    Happiness(&'a str),
    Nature(&'a str),
    Stats(StatLineKind, &'a str),
    Move(&'a str),
}

type Classifier = for<'a> fn(&'a str) -> Option<Line<'a>>;

/// Tried top to bottom, the first match wins
const CLASSIFIERS: [Classifier; 7] = [
    ability_line,
    level_line,
    shiny_line,
    happiness_line,
    nature_line,
    stats_line,
    move_line,
];

fn ability_line(line: &str) -> Option<Line<'_>> {
    capture(ability_re(), line).map(Line::Ability)
}

fn level_line(line: &str) -> Option<Line<'_>> {
    capture(level_re(), line).map(Line::Level)
}

fn shiny_line(line: &str) -> Option<Line<'_>> {
    capture(shiny_re(), line).map(|x| Line::Shiny(x == "Yes"))
}

fn happiness_line(line: &str) -> Option<Line<'_>> {
    capture(happiness_re(), line).map(Line::Happiness)
}

fn nature_line(line: &str) -> Option<Line<'_>> {
    capture(nature_re(), line).map(|x| Line::Nature(x.trim_end()))
}

fn stats_line(line: &str) -> Option<Line<'_>> {
    let caps = stats_re().captures(line)?;
    let kind = if caps.get(1)?.as_str().starts_with(|c| c == 'E' || c == 'e') {
        StatLineKind::Effort
    } else {
        StatLineKind::Individual
    };
    Some(Line::Stats(kind, caps.get(2)?.as_str()))
}

fn move_line(line: &str) -> Option<Line<'_>> {
    capture(move_re(), line).map(Line::Move)
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line).and_then(|caps| caps.get(1)).map(|x| x.as_str())
}

impl<'a> Line<'a> {
    /// Classifies an attribute line. Unrecognized lines yield `None`.
    ///
    /// ```
    /// use teampaste::text::{Line, StatLineKind};
    /// assert_eq!(Line::classify("Ability: Levitate"), Some(Line::Ability("Levitate")));
    /// assert_eq!(Line::classify("Bold Nature"), Some(Line::Nature("Bold")));
    /// assert_eq!(
    ///     Line::classify("IVs: 0 Atk"),
    ///     Some(Line::Stats(StatLineKind::Individual, "0 Atk"))
    /// );
    /// assert_eq!(Line::classify("Tera Type: Fairy"), None);
    /// ```
    pub fn classify(line: &'a str) -> Option<Line<'a>> {
        CLASSIFIERS.iter().find_map(|classify| classify(line))
    }
}
