//! Renderer module
//!
//! Renders a ranked list to one of the output formats: tsv, jsonl, json

use serde::Serialize;
use std::io::Write;

use crate::core::error::FreqError;
use crate::core::model::{Entry, Token};
use crate::core::mode::{CharDetail, Mode};
use crate::core::unicode::NameTable;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Tsv,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = FreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" | "text" => Ok(OutputFormat::Tsv),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FreqError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Structured form of one entry for jsonl/json
#[derive(Debug, Serialize)]
struct Row {
    count: u64,
    token: String,
    /// Exact bytes when `token` had to be decoded lossily
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// Renderer for ranked entries
pub struct Renderer<'a> {
    mode: Mode,
    format: OutputFormat,
    names: &'a dyn NameTable,
}

impl<'a> Renderer<'a> {
    pub fn new(mode: Mode, format: OutputFormat, names: &'a dyn NameTable) -> Self {
        Self {
            mode,
            format,
            names,
        }
    }

    /// Render every entry to the writer, in order
    pub fn render_to<W: Write>(&self, entries: &[Entry], mut writer: W) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Tsv => self.render_tsv(entries, &mut writer),
            OutputFormat::Jsonl => self.render_jsonl(entries, &mut writer),
            OutputFormat::Json => self.render_json(entries, &mut writer),
        }
    }

    fn describe(&self, entry: &Entry) -> Option<CharDetail> {
        (self.mode.spec().describe)(&entry.token, self.names)
    }

    /// `<count>\t<token>` for text modes, `<count>\t<code>\t<display>\t<name>`
    /// for byte and rune modes. Text tokens are written as raw bytes.
    fn render_tsv<W: Write>(&self, entries: &[Entry], writer: &mut W) -> std::io::Result<()> {
        for entry in entries {
            match self.describe(entry) {
                Some(detail) => writeln!(
                    writer,
                    "{}\t{}\t{}\t{}",
                    entry.count, detail.code, detail.display, detail.name
                )?,
                None => {
                    write!(writer, "{}\t", entry.count)?;
                    match &entry.token {
                        Token::Text(bytes) => writer.write_all(bytes)?,
                        other => write!(writer, "{}", other.to_text())?,
                    }
                    writer.write_all(b"\n")?;
                }
            }
        }
        Ok(())
    }

    fn row(&self, entry: &Entry) -> Row {
        let detail = self.describe(entry);
        Row {
            count: entry.count,
            token: entry.token.to_text().into_owned(),
            bytes: entry.token.invalid_utf8().map(<[u8]>::to_vec),
            code: detail.as_ref().map(|d| d.code.clone()),
            display: detail.as_ref().map(|d| d.display.to_string()),
            name: detail.map(|d| d.name),
        }
    }

    /// One JSON object per line
    fn render_jsonl<W: Write>(&self, entries: &[Entry], writer: &mut W) -> std::io::Result<()> {
        for entry in entries {
            serde_json::to_writer(&mut *writer, &self.row(entry))?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// A single JSON array
    fn render_json<W: Write>(&self, entries: &[Entry], writer: &mut W) -> std::io::Result<()> {
        let rows: Vec<Row> = entries.iter().map(|e| self.row(e)).collect();
        serde_json::to_writer(&mut *writer, &rows)?;
        writer.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn stub(c: char) -> String {
        format!("NAME-{:X}", c as u32)
    }

    fn render(mode: Mode, format: OutputFormat, entries: &[Entry]) -> Vec<u8> {
        let names = stub;
        let renderer = Renderer::new(mode, format, &names);
        let mut buffer = Vec::new();
        renderer.render_to(entries, &mut buffer).unwrap();
        buffer
    }

    fn render_string(mode: Mode, format: OutputFormat, entries: &[Entry]) -> String {
        String::from_utf8(render(mode, format, entries)).unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "xml".parse::<OutputFormat>();
        assert!(matches!(result, Err(FreqError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_output_format_default() {
        let format: OutputFormat = Default::default();
        assert_eq!(format, OutputFormat::Tsv);
    }

    #[test]
    fn test_render_empty() {
        for mode in [Mode::Line, Mode::Byte, Mode::Rune, Mode::Word] {
            assert!(render(mode, OutputFormat::Tsv, &[]).is_empty());
            assert!(render(mode, OutputFormat::Jsonl, &[]).is_empty());
        }
        assert_eq!(render_string(Mode::Line, OutputFormat::Json, &[]), "[]\n");
    }

    #[test]
    fn test_render_tsv_text() {
        let entries = vec![
            Entry::new(Token::text("hello,"), 2),
            Entry::new(Token::text(""), 1),
        ];
        assert_eq!(
            render_string(Mode::Word, OutputFormat::Tsv, &entries),
            "2\thello,\n1\t\n"
        );
    }

    #[test]
    fn test_render_tsv_keeps_raw_bytes() {
        let entries = vec![Entry::new(Token::text(vec![b'a', 0xff, b'\r']), 1)];
        assert_eq!(
            render(Mode::Line, OutputFormat::Tsv, &entries),
            b"1\ta\xff\r\n".to_vec()
        );
    }

    #[test]
    fn test_render_tsv_bytes() {
        let entries = vec![
            Entry::new(Token::Byte(b'a'), 3),
            Entry::new(Token::Byte(b'b'), 1),
            Entry::new(Token::Byte(b'\n'), 1),
        ];
        assert_eq!(
            render_string(Mode::Byte, OutputFormat::Tsv, &entries),
            "3\t61\ta\tNAME-61\n1\t62\tb\tNAME-62\n1\t0a\t\u{FFFD}\tNAME-A\n"
        );
    }

    #[test]
    fn test_render_tsv_runes() {
        let entries = vec![
            Entry::new(Token::Rune('日'), 2),
            Entry::new(Token::Rune('\u{FFFD}'), 1),
            Entry::new(Token::Rune('\t'), 1),
        ];
        assert_eq!(
            render_string(Mode::Rune, OutputFormat::Tsv, &entries),
            "2\tU+65E5\t日\tNAME-65E5\n1\tU+FFFD\t\u{FFFD}\tNAME-FFFD\n1\tU+0009\t\u{FFFD}\tNAME-9\n"
        );
    }

    #[test]
    fn test_render_jsonl() {
        let entries = vec![
            Entry::new(Token::text("b"), 2),
            Entry::new(Token::text("a"), 1),
        ];
        let output = render_string(Mode::Line, OutputFormat::Jsonl, &entries);
        let lines: Vec<Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["count"], 2);
        assert_eq!(lines[0]["token"], "b");
        assert!(lines[0].get("code").is_none());
        assert!(lines[0].get("name").is_none());
    }

    #[test]
    fn test_render_json_runes() {
        let entries = vec![Entry::new(Token::Rune('é'), 4)];
        let output = render_string(Mode::Rune, OutputFormat::Json, &entries);
        let value: Value = serde_json::from_str(&output).unwrap();
        let row = &value[0];
        assert_eq!(row["count"], 4);
        assert_eq!(row["token"], "é");
        assert_eq!(row["code"], "U+00E9");
        assert_eq!(row["display"], "é");
        assert_eq!(row["name"], "NAME-E9");
    }

    #[test]
    fn test_render_json_invalid_utf8_keeps_bytes() {
        let entries = vec![
            Entry::new(Token::text(vec![0xfe]), 1),
            Entry::new(Token::text(vec![0xff]), 1),
        ];
        let output = render_string(Mode::Line, OutputFormat::Json, &entries);
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["token"], "\u{FFFD}");
        assert_eq!(value[0]["bytes"], serde_json::json!([0xfe]));
        assert_eq!(value[1]["bytes"], serde_json::json!([0xff]));
        assert_ne!(value[0], value[1]);
    }

    #[test]
    fn test_render_jsonl_valid_text_has_no_bytes() {
        let entries = vec![Entry::new(Token::text("héllo"), 1)];
        let output = render_string(Mode::Word, OutputFormat::Jsonl, &entries);
        let row: Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(row["token"], "héllo");
        assert!(row.get("bytes").is_none());
    }

    #[test]
    fn test_render_jsonl_byte_token_matches_display() {
        let entries = vec![Entry::new(Token::Byte(0xe9), 1)];
        let output = render_string(Mode::Byte, OutputFormat::Jsonl, &entries);
        let row: Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(row["token"], "é");
        assert_eq!(row["display"], "é");
        assert_eq!(row["code"], "e9");
        assert!(row.get("bytes").is_none());
    }
}
