//! # FIGfont support
//!
//! Parses FIGfont 2 (`.flf`) files and renders text with them.
//!
//! A font file is a header line, a block of comments, the 102 required
//! FIGcharacters (ASCII 32-126 followed by the seven Deutsch characters)
//! and any number of code-tagged characters. Every FIGcharacter is
//! `height` rows long and each row ends with one or more end-marks.
//!
//! ```text
//! flf2a$ 6 5 14 0 1 0      signature+hardblank height baseline max_length
//! Comment line              old_layout comment_lines [direction full_layout codetags]
//!  _   _ @
//! | | | |@
//! ...
//! ```
//!
//! Horizontal layout follows the font: full width, fitting (kerning) or
//! smushing with the font's controlled rules, or universal smushing when it
//! names none.

use std::collections::HashMap;
use std::num::ParseIntError;
use std::ops::BitOr;

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Deutsch characters that follow ASCII 32-126 in every font file
const DEUTSCH_CODEPOINTS: [u32; 7] = [196, 214, 220, 228, 246, 252, 223];

/// Number of FIGcharacters every font must define
pub const REQUIRED_CHARACTERS: usize = 95 + DEUTSCH_CODEPOINTS.len();

fn required_codepoints() -> impl Iterator<Item = u32> {
    (32..=126).chain(DEUTSCH_CODEPOINTS)
}

/// Controlled horizontal smushing rules, bits 0-5 of the layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmushRules(u8);

impl SmushRules {
    /// Two identical sub-characters become one
    pub const EQUAL: Self = Self(1);
    /// `_` gives way to `|/\[]{}()<>`
    pub const UNDERSCORE: Self = Self(2);
    /// The later class of `|`, `/\`, `[]`, `{}`, `()`, `<>` wins
    pub const HIERARCHY: Self = Self(4);
    /// Opposing brackets, braces or parentheses become `|`
    pub const OPPOSITE_PAIR: Self = Self(8);
    /// `/\` becomes `|`, `\/` becomes `Y`, `><` becomes `X`
    pub const BIG_X: Self = Self(16);
    /// Two hardblanks become one
    pub const HARDBLANK: Self = Self(32);

    pub fn from_bits(bits: u32) -> Self {
        Self((bits & 63) as u8)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, rule: Self) -> bool {
        self.0 & rule.0 == rule.0
    }

    /// No controlled rule is set: later sub-characters overwrite earlier ones
    pub fn is_universal(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for SmushRules {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// How consecutive FIGcharacters are joined horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every character keeps its full width
    FullWidth,
    /// Characters slide together until they touch
    Fitting,
    /// Characters slide one column further when the touching pair can be merged
    Smushing(SmushRules),
}

impl Layout {
    /// Sub-character replacing `left` (end of the line so far) and `right`
    /// (start of the next FIGcharacter) when both are visible and overlap
    pub fn smush(self, left: char, right: char, hardblank: char) -> Option<char> {
        let Layout::Smushing(rules) = self else {
            return None;
        };
        if rules.is_universal() {
            return Some(if right == hardblank { left } else { right });
        }
        if left == hardblank || right == hardblank {
            return (rules.contains(SmushRules::HARDBLANK) && left == right).then_some(left);
        }
        if rules.contains(SmushRules::EQUAL) && left == right {
            return Some(left);
        }
        if rules.contains(SmushRules::UNDERSCORE) {
            const BORDERS: &str = "|/\\[]{}()<>";
            if left == '_' && BORDERS.contains(right) {
                return Some(right);
            }
            if right == '_' && BORDERS.contains(left) {
                return Some(left);
            }
        }
        if rules.contains(SmushRules::HIERARCHY) {
            if let (Some(l), Some(r)) = (hierarchy_class(left), hierarchy_class(right)) {
                if l != r {
                    return Some(if l > r { left } else { right });
                }
            }
        }
        if rules.contains(SmushRules::OPPOSITE_PAIR)
            && matches!(
                (left, right),
                ('[', ']') | (']', '[') | ('{', '}') | ('}', '{') | ('(', ')') | (')', '(')
            )
        {
            return Some('|');
        }
        if rules.contains(SmushRules::BIG_X) {
            match (left, right) {
                ('/', '\\') => return Some('|'),
                ('\\', '/') => return Some('Y'),
                ('>', '<') => return Some('X'),
                _ => {}
            }
        }
        None
    }
}

fn hierarchy_class(c: char) -> Option<u8> {
    match c {
        '|' => Some(1),
        '/' | '\\' => Some(2),
        '[' | ']' => Some(3),
        '{' | '}' => Some(4),
        '(' | ')' => Some(5),
        '<' | '>' => Some(6),
        _ => None,
    }
}

/// Order in which characters are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintDirection {
    LeftToRight,
    RightToLeft,
}

/// Parsed header line of a FIGfont
#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub hardblank: char,
    pub height: usize,
    pub baseline: usize,
    pub max_length: usize,
    pub comment_lines: usize,
    pub layout: Layout,
    pub print_direction: PrintDirection,
    pub codetag_count: usize,
}

impl Header {
    fn parse(line: &str) -> Result<Self, HeaderError> {
        let mut parameters = line.split(' ').filter(|parameter| !parameter.is_empty());
        let mut required = || {
            parameters
                .next()
                .ok_or_else(|| HeaderError::NotEnoughParameters(line.to_owned()))
        };
        let signature = required()?;
        let height = required()?;
        let baseline = required()?;
        let max_length = required()?;
        let old_layout = required()?;
        let comment_lines = required()?;
        let print_direction = parameters.next();
        let full_layout = parameters.next();
        let codetag_count = parameters.next();

        let Some(hardblank) = signature.strip_prefix("flf2a") else {
            return Err(HeaderError::UnknownSignature(signature.to_owned()));
        };
        let mut hardblank_chars = hardblank.chars();
        let hardblank = match (hardblank_chars.next(), hardblank_chars.next()) {
            (Some(c), None) if !matches!(c, ' ' | '\r' | '\n' | '\0') => c,
            _ => return Err(HeaderError::Hardblank(hardblank.to_owned())),
        };

        let height: usize = height.parse()?;
        if height == 0 {
            return Err(HeaderError::ZeroHeight);
        }
        // Plenty of fonts in the wild carry a bogus baseline; it is informational only.
        let baseline = baseline.parse().unwrap_or(1);
        let max_length = max_length.parse()?;
        let old_layout: i32 = old_layout.parse()?;
        let comment_lines = comment_lines.parse()?;

        let print_direction = match print_direction {
            None | Some("0") => PrintDirection::LeftToRight,
            Some("1") => PrintDirection::RightToLeft,
            Some(other) => return Err(HeaderError::PrintDirection(other.to_owned())),
        };
        let full_layout: Option<u32> = full_layout.map(str::parse).transpose()?;
        // full_layout supersedes old_layout: bit 128 smushing, bit 64 fitting
        let layout = match full_layout {
            Some(full) if full & 128 != 0 => Layout::Smushing(SmushRules::from_bits(full)),
            Some(full) if full & 64 != 0 => Layout::Fitting,
            Some(_) => Layout::FullWidth,
            None if old_layout < 0 => Layout::FullWidth,
            None if old_layout == 0 => Layout::Fitting,
            None => Layout::Smushing(SmushRules::from_bits(old_layout as u32)),
        };
        let codetag_count = codetag_count.map(str::parse).transpose()?.unwrap_or(0);

        Ok(Self {
            hardblank,
            height,
            baseline,
            max_length,
            comment_lines,
            layout,
            print_direction,
            codetag_count,
        })
    }
}

/// A single FIGcharacter
#[derive(Debug, Clone)]
struct Glyph {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl Glyph {
    fn parse(lines: &[&str], codepoint: u32) -> Result<Self, FigFontError> {
        let mut rows = lines
            .iter()
            .map(|line| {
                let endmark = line.chars().next_back()?;
                Some(line.trim_end_matches(endmark).chars().collect::<Vec<_>>())
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(FigFontError::EmptyRow(codepoint))?;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Ok(Self { width, rows })
    }
}

/// A parsed FIGfont
#[derive(Debug, Clone)]
pub struct FigFont {
    header: Header,
    comments: String,
    glyphs: HashMap<u32, Glyph>,
}

impl FigFont {
    /// Parse the contents of a `.flf` file
    pub fn parse(source: &str) -> Result<Self, FigFontError> {
        let source = source.replace("\r\n", "\n").replace('\r', "\n");
        let mut lines = source.lines();
        let header = Header::parse(lines.next().ok_or(HeaderError::Missing)?)?;
        let comments = lines
            .by_ref()
            .take(header.comment_lines)
            .collect::<Vec<_>>()
            .join("\n");

        let mut glyphs = HashMap::new();
        for codepoint in required_codepoints() {
            let rows: Vec<&str> = lines.by_ref().take(header.height).collect();
            if rows.len() < header.height {
                return Err(FigFontError::MissingRequiredCharacters(glyphs.len()));
            }
            glyphs.insert(codepoint, Glyph::parse(&rows, codepoint)?);
        }

        while let Some(tag) = lines.next() {
            let Some(code) = tag.split_whitespace().next() else {
                continue;
            };
            let (codepoint, keep) = parse_codepoint(code)?;
            let rows: Vec<&str> = lines.by_ref().take(header.height).collect();
            if rows.len() < header.height {
                return Err(FigFontError::TruncatedCharacter(codepoint));
            }
            if keep {
                glyphs.insert(codepoint, Glyph::parse(&rows, codepoint)?);
            }
        }

        Ok(Self {
            header,
            comments,
            glyphs,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Render `text`, one block of `height` rows per input line
    pub fn render(&self, text: &str) -> String {
        text.split('\n')
            .flat_map(|line| self.render_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs
            .get(&u32::from(c))
            .or_else(|| self.glyphs.get(&0))
    }

    /// Columns `glyph` slides into the line so far. Fitting stops when
    /// visible sub-characters touch; smushing goes one column further when
    /// every touching pair merges. Glyphs narrower than two columns only fit.
    fn overlap(
        &self,
        buffer: &[Vec<char>],
        glyph: &Glyph,
        width: usize,
        previous_width: usize,
    ) -> usize {
        if self.header.layout == Layout::FullWidth {
            return 0;
        }
        let can_smush = previous_width >= 2 && glyph.width >= 2;
        buffer
            .iter()
            .zip(&glyph.rows)
            .map(|(row, glyph_row)| {
                let trailing = row.iter().rev().take_while(|&&c| c == ' ').count();
                let leading = glyph_row.iter().take_while(|&&c| c == ' ').count();
                let touching = (row.iter().rev().nth(trailing), glyph_row.get(leading));
                match touching {
                    (Some(&left), Some(&right))
                        if can_smush
                            && self
                                .header
                                .layout
                                .smush(left, right, self.header.hardblank)
                                .is_some() =>
                    {
                        trailing + leading + 1
                    }
                    _ => trailing + leading,
                }
            })
            .min()
            .unwrap_or(0)
            .min(width)
            .min(glyph.width)
    }

    fn render_line(&self, line: &str) -> Vec<String> {
        let mut buffer: Vec<Vec<char>> = vec![Vec::new(); self.header.height];
        let mut width = 0;

        let chars: Vec<char> = match self.header.print_direction {
            PrintDirection::LeftToRight => line.chars().collect(),
            PrintDirection::RightToLeft => line.chars().rev().collect(),
        };
        let mut previous_width = 0;
        for c in chars {
            let Some(glyph) = self.glyph(c) else {
                tracing::debug!("No FIGcharacter for {:?}, skipping", c);
                continue;
            };
            let overlap = self.overlap(&buffer, glyph, width, previous_width);
            for (row, glyph_row) in buffer.iter_mut().zip(&glyph.rows) {
                let start = row.len() - overlap;
                for (slot, &g) in row[start..].iter_mut().zip(glyph_row) {
                    *slot = match (*slot, g) {
                        (' ', _) => g,
                        (_, ' ') => *slot,
                        (left, right) => self
                            .header
                            .layout
                            .smush(left, right, self.header.hardblank)
                            .unwrap_or(right),
                    };
                }
                row.extend_from_slice(&glyph_row[overlap..]);
            }
            width += glyph.width - overlap;
            previous_width = glyph.width;
        }

        buffer
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|c| if c == self.header.hardblank { ' ' } else { c })
                    .collect()
            })
            .collect()
    }
}


/// Parse a code tag: decimal, `0x` hexadecimal or `0` octal, optionally negative.
/// Negative codes mark characters that are present in the file but never used.
fn parse_codepoint(code: &str) -> Result<(u32, bool), FigFontError> {
    let (keep, digits) = match code.strip_prefix('-') {
        Some(rest) => (false, rest),
        None => (true, code),
    };
    let parsed = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else if digits.len() > 1 && digits.starts_with('0') {
        u32::from_str_radix(&digits[1..], 8)
    } else {
        digits.parse()
    };
    let codepoint = parsed.map_err(|source| FigFontError::InvalidCodePoint {
        code: code.to_owned(),
        source,
    })?;
    if (keep && codepoint <= 0x7FFF_FFFF) || (!keep && codepoint <= 0x8000_0000) {
        Ok((codepoint, keep))
    } else {
        Err(FigFontError::CodePointOutOfRange(codepoint))
    }
}

/// Display-column width of the widest line
pub fn display_width(text: &str) -> usize {
    text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

#[derive(Debug, Error)]
pub enum FigFontError {
    #[error("bad header: {0}")]
    BadHeader(#[from] HeaderError),
    #[error("not enough required FIGcharacters, found {0}, expected {REQUIRED_CHARACTERS}")]
    MissingRequiredCharacters(usize),
    #[error("FIGcharacter {0} is cut short")]
    TruncatedCharacter(u32),
    #[error("invalid code tag \"{code}\": {source}")]
    InvalidCodePoint {
        code: String,
        #[source]
        source: ParseIntError,
    },
    #[error("code tag {0} is out of range")]
    CodePointOutOfRange(u32),
    #[error("empty row in FIGcharacter {0}")]
    EmptyRow(u32),
}

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("missing header")]
    Missing,
    #[error(r#""{0}" does not include enough parameters"#)]
    NotEnoughParameters(String),
    #[error(r#"{0} does not begin with "flf2a""#)]
    UnknownSignature(String),
    #[error(r#"hardblank "{0}" is not a single usable character"#)]
    Hardblank(String),
    #[error("{0}")]
    ParseInt(#[from] ParseIntError),
    #[error("height parameter is 0")]
    ZeroHeight,
    #[error(r#""{0}" is an invalid print direction, expecting 0 or 1"#)]
    PrintDirection(String),
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Two-row font: alphanumerics are a falling diagonal, everything else a hardblank column
    pub(crate) fn diagonal_font(old_layout: i32) -> String {
        let mut font = format!("flf2a$ 2 1 4 {old_layout} 1\ntest font\n");
        for codepoint in required_codepoints() {
            let c = char::from_u32(codepoint).unwrap();
            if c.is_ascii_alphanumeric() {
                font.push_str(&format!("{c} @\n {c}@@\n"));
            } else {
                font.push_str("$@\n$@@\n");
            }
        }
        font
    }

    #[test]
    fn test_parse_header() {
        let font = FigFont::parse(&diagonal_font(0)).unwrap();
        assert_eq!(font.header().hardblank, '$');
        assert_eq!(font.header().height, 2);
        assert_eq!(font.header().layout, Layout::Fitting);
        assert_eq!(font.header().print_direction, PrintDirection::LeftToRight);
        assert_eq!(font.comments(), "test font");
    }

    #[test]
    fn test_layout_decoding() {
        let layout = |header: &str| Header::parse(header).unwrap().layout;
        assert_eq!(layout("flf2a$ 2 1 4 -1 0"), Layout::FullWidth);
        assert_eq!(layout("flf2a$ 2 1 4 0 0"), Layout::Fitting);
        assert_eq!(
            layout("flf2a$ 2 1 4 15 0"),
            Layout::Smushing(
                SmushRules::EQUAL
                    | SmushRules::UNDERSCORE
                    | SmushRules::HIERARCHY
                    | SmushRules::OPPOSITE_PAIR
            )
        );
        assert_eq!(
            layout("flf2a$ 6 5 16 15 11 0 24463"),
            layout("flf2a$ 2 1 4 15 0")
        );
        assert_eq!(layout("flf2a$ 2 1 4 0 0 0 128"), Layout::Smushing(SmushRules::default()));
        assert_eq!(layout("flf2a$ 2 1 4 0 0 0 64"), Layout::Fitting);
    }

    #[test]
    fn test_smush_rules() {
        let controlled =
            |rules: SmushRules, left, right| Layout::Smushing(rules).smush(left, right, '$');
        assert_eq!(controlled(SmushRules::EQUAL, '|', '|'), Some('|'));
        assert_eq!(controlled(SmushRules::EQUAL, '$', '$'), None);
        assert_eq!(controlled(SmushRules::UNDERSCORE, '_', '/'), Some('/'));
        assert_eq!(controlled(SmushRules::UNDERSCORE, ')', '_'), Some(')'));
        assert_eq!(controlled(SmushRules::HIERARCHY, '|', '/'), Some('/'));
        assert_eq!(controlled(SmushRules::HIERARCHY, '>', '['), Some('>'));
        assert_eq!(controlled(SmushRules::HIERARCHY, '/', '\\'), None);
        assert_eq!(controlled(SmushRules::OPPOSITE_PAIR, ']', '['), Some('|'));
        assert_eq!(controlled(SmushRules::OPPOSITE_PAIR, '(', ']'), None);
        assert_eq!(controlled(SmushRules::BIG_X, '/', '\\'), Some('|'));
        assert_eq!(controlled(SmushRules::BIG_X, '\\', '/'), Some('Y'));
        assert_eq!(controlled(SmushRules::BIG_X, '>', '<'), Some('X'));
        assert_eq!(controlled(SmushRules::BIG_X, '<', '>'), None);
        assert_eq!(controlled(SmushRules::HARDBLANK, '$', '$'), Some('$'));
        assert_eq!(controlled(SmushRules::EQUAL, 'a', 'b'), None);

        let universal = Layout::Smushing(SmushRules::default());
        assert_eq!(universal.smush('a', 'b', '$'), Some('b'));
        assert_eq!(universal.smush('a', '$', '$'), Some('a'));
        assert_eq!(universal.smush('$', 'b', '$'), Some('b'));
        assert_eq!(Layout::Fitting.smush('|', '|', '$'), None);
    }

    #[test]
    fn test_equal_character_smushing() {
        let font = FigFont::parse(&diagonal_font(1)).unwrap();
        assert_eq!(font.render("AA"), "A \n A");
        // no rule merges A with B, so they are only fitted
        assert_eq!(font.render("AB"), "AB \n AB");
    }

    #[test]
    fn test_universal_smushing_prefers_later_character() {
        let source = diagonal_font(0).replacen("flf2a$ 2 1 4 0 1", "flf2a$ 2 1 4 0 1 0 128", 1);
        let font = FigFont::parse(&source).unwrap();
        assert_eq!(font.render("AB"), "B \n B");
    }

    #[test]
    fn test_narrow_glyphs_are_not_smushed() {
        let font = FigFont::parse(&diagonal_font(1)).unwrap();
        // the one-column space glyph is a hardblank and only fits
        assert_eq!(font.render("A A"), "A  A \n A  A");
    }

    #[test]
    fn test_full_width_render() {
        let font = FigFont::parse(&diagonal_font(-1)).unwrap();
        assert_eq!(font.render("AB"), "A B \n A B");
    }

    #[test]
    fn test_fitting_render() {
        let font = FigFont::parse(&diagonal_font(0)).unwrap();
        assert_eq!(font.render("AB"), "AB \n AB");
    }

    #[test]
    fn test_hardblank_survives_fitting() {
        let font = FigFont::parse(&diagonal_font(0)).unwrap();
        assert_eq!(font.render("A B"), "A  B \n A  B");
    }

    #[test]
    fn test_multiline_input_stacks_blocks() {
        let font = FigFont::parse(&diagonal_font(-1)).unwrap();
        let rendered = font.render("A\nB");
        assert_eq!(rendered.lines().count(), 4);
        assert_eq!(rendered, "A \n A\nB \n B");
    }

    #[test]
    fn test_right_to_left() {
        let source = diagonal_font(-1).replacen("flf2a$ 2 1 4 -1 1", "flf2a$ 2 1 4 -1 1 1", 1);
        let font = FigFont::parse(&source).unwrap();
        assert_eq!(font.header().print_direction, PrintDirection::RightToLeft);
        assert_eq!(font.render("AB"), "B A \n B A");
    }

    #[test]
    fn test_code_tagged_characters() {
        let mut source = diagonal_font(-1);
        source.push_str("0x263A SMILING FACE\n:)@\n(:@@\n-0x20AC IGNORED\nE @\nE @@\n");
        let font = FigFont::parse(&source).unwrap();
        assert_eq!(font.render("\u{263A}"), ":)\n(:");
        // ignored and unknown characters render as nothing
        assert_eq!(font.render("\u{20AC}"), "\n");
    }

    #[test]
    fn test_crlf_font_file() {
        let source = diagonal_font(-1).replace('\n', "\r\n");
        let font = FigFont::parse(&source).unwrap();
        assert_eq!(font.render("A"), "A \n A");
    }

    #[test]
    fn test_missing_characters() {
        let source = "flf2a$ 1 1 3 -1 0\nA@@\nB@@\n";
        assert!(matches!(
            FigFont::parse(source),
            Err(FigFontError::MissingRequiredCharacters(2))
        ));
    }

    #[test]
    fn test_bad_headers() {
        assert!(matches!(
            FigFont::parse(""),
            Err(FigFontError::BadHeader(HeaderError::Missing))
        ));
        assert!(matches!(
            FigFont::parse("tlf2a$ 1 1 3 -1 0"),
            Err(FigFontError::BadHeader(HeaderError::UnknownSignature(_)))
        ));
        assert!(matches!(
            FigFont::parse("flf2a$ 1 1"),
            Err(FigFontError::BadHeader(HeaderError::NotEnoughParameters(_)))
        ));
        assert!(matches!(
            FigFont::parse("flf2a$ 0 1 3 -1 0"),
            Err(FigFontError::BadHeader(HeaderError::ZeroHeight))
        ));
        assert!(matches!(
            FigFont::parse("flf2a 1 1 3 -1 0"),
            Err(FigFontError::BadHeader(HeaderError::Hardblank(_)))
        ));
    }

    #[test]
    fn test_full_layout_overrides_old_layout() {
        let source = diagonal_font(0).replacen("flf2a$ 2 1 4 0 1", "flf2a$ 2 1 4 0 1 0 0", 1);
        let font = FigFont::parse(&source).unwrap();
        assert_eq!(font.header().layout, Layout::FullWidth);
    }

    #[test]
    fn test_parse_codepoint() {
        assert_eq!(parse_codepoint("65").unwrap(), (65, true));
        assert_eq!(parse_codepoint("0x41").unwrap(), (65, true));
        assert_eq!(parse_codepoint("0101").unwrap(), (65, true));
        assert_eq!(parse_codepoint("-12").unwrap(), (12, false));
        assert!(parse_codepoint("zz").is_err());
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("ab\nabcd\n"), 4);
        assert_eq!(display_width("██"), 2);
        assert_eq!(display_width(""), 0);
    }
}
