//! 职业表错误处理模块
//!
//! 职业名表本身是只读常量，不会出错；这里的错误只来自外围：
//! 不受信任的职业编号、名称解析、文本编码以及序列化。

use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

/// 职业查询与转换过程中可能出现的错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassError {
    /// 职业编号超出范围
    #[error("Unknown class id: {0}")]
    UnknownId(u8),

    /// 无法识别的职业名称
    #[error("Unknown class name: {0:?}")]
    UnknownName(String),

    /// 文本编码错误
    #[error("Charmap error: {0}")]
    Charmap(#[from] CharmapError),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 反序列化错误
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

/// 游戏字符表编码/解码错误
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CharmapError {
    #[error("character {ch:?} at index {index} has no charmap encoding")]
    Unencodable { ch: char, index: usize },

    #[error("byte 0x{byte:02X} at index {index} is not a known charmap code")]
    UnknownByte { byte: u8, index: usize },

    #[error("encoded text is missing its EOS terminator")]
    MissingTerminator,
}

impl From<DecodeError> for ClassError {
    fn from(err: DecodeError) -> Self {
        ClassError::DeserializationError(err.to_string())
    }
}

impl From<EncodeError> for ClassError {
    fn from(err: EncodeError) -> Self {
        ClassError::SerializationError(err.to_string())
    }
}

/// 将错误转换为用户友好的消息
pub fn describe_error(error: &ClassError) -> String {
    match error {
        ClassError::UnknownId(id) => format!("No class has id {id} (valid ids are 0-12)"),
        ClassError::UnknownName(name) => format!("No class is called {name:?}"),
        ClassError::Charmap(CharmapError::Unencodable { ch, .. }) => {
            format!("The game font cannot display {ch:?}")
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charmap_errors_convert() {
        let err: ClassError = CharmapError::MissingTerminator.into();
        assert_eq!(err, ClassError::Charmap(CharmapError::MissingTerminator));
    }

    #[test]
    fn describe_unknown_id() {
        assert_eq!(
            describe_error(&ClassError::UnknownId(13)),
            "No class has id 13 (valid ids are 0-12)"
        );
    }

    #[test]
    fn describe_falls_back_to_display() {
        let err = ClassError::Charmap(CharmapError::UnknownByte { byte: 0xF7, index: 2 });
        assert_eq!(
            describe_error(&err),
            "Charmap error: byte 0xF7 at index 2 is not a known charmap code"
        );
    }
}
