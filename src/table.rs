//! 职业名表输出
//!
//! 命令行工具的三种输出格式：纯文本、JSON、字符表编码（十六进制）。

use anyhow::{Context, Result};
use classes::Class;
use clap::ValueEnum;
use error::ClassError;
use serde::Serialize;
use std::fmt::Write;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Charmap,
}

/// 表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRow {
    pub id: u8,
    pub constant: &'static str,
    pub name: &'static str,
}

impl From<Class> for ClassRow {
    fn from(class: Class) -> Self {
        Self {
            id: class.id(),
            constant: class.constant_name(),
            name: class.name(),
        }
    }
}

/// 解析查询：纯数字按编号查找，否则按名称查找
pub fn resolve(query: &str) -> Result<Class, ClassError> {
    match query.trim().parse::<u8>() {
        Ok(id) => Class::try_from(id),
        Err(_) => query.parse(),
    }
}

pub fn render(classes: &[Class], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(classes)),
        OutputFormat::Json => render_json(classes),
        OutputFormat::Charmap => Ok(render_charmap(classes)),
    }
}

fn render_text(classes: &[Class]) -> String {
    let mut out = String::new();
    for &class in classes {
        let _ = writeln!(
            out,
            "{:>2}  {:<16} {}",
            class.id(),
            class.constant_name(),
            class.name()
        );
    }
    out
}

fn render_json(classes: &[Class]) -> Result<String> {
    let rows: Vec<ClassRow> = classes.iter().copied().map(ClassRow::from).collect();
    let mut json = serde_json::to_string_pretty(&rows).context("Failed to serialize class table")?;
    json.push('\n');
    Ok(json)
}

fn render_charmap(classes: &[Class]) -> String {
    let mut out = String::new();
    for &class in classes {
        let bytes: Vec<String> = class
            .encoded_name()
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect();
        let _ = writeln!(
            out,
            "{:>2}  {:<9}  {}",
            class.id(),
            class.name(),
            bytes.join(" ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_by_id_or_name() {
        assert_eq!(resolve("7"), Ok(Class::Wizard));
        assert_eq!(resolve(" 10 "), Ok(Class::Paladin));
        assert_eq!(resolve("thief"), Ok(Class::Thief));
        assert_eq!(resolve("CLASS_DRUID"), Ok(Class::Druid));
        assert_eq!(resolve("13"), Err(ClassError::UnknownId(13)));
        assert_eq!(resolve("Bardd"), Err(ClassError::UnknownName("Bardd".to_string())));
    }

    #[test]
    fn text_rows() {
        let out = render(&[Class::Artificer, Class::Thief], OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            " 0  CLASS_ARTIFICER  Artificer\n11  CLASS_THIEF      Thief\n"
        );
    }

    #[test]
    fn charmap_rows() {
        let out = render(&[Class::Bard], OutputFormat::Charmap).unwrap();
        assert_eq!(out, " 2  Bard       BC D5 E6 D8 FF\n");
    }

    #[test]
    fn json_rows() {
        let out = render(&[Class::Monk], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "id": 5, "constant": "CLASS_MONK", "name": "Monk" }])
        );
    }
}
