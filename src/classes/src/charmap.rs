// src/classes/src/charmap.rs

//! 游戏字符表
//!
//! 游戏字体使用的单字节编码，字符串以 [`EOS`] 结尾。这里只收录
//! 职业名称和常见界面文字会用到的字符。

use error::CharmapError;

use crate::class::NUM_CLASSES;
use crate::names::NAMES;

/// 字符串结束符
pub const EOS: u8 = 0xFF;

/// 最长职业名称的字符数（不含 EOS）
pub const CLASS_NAME_LENGTH: usize = 9;

/// 字节 -> 字符的查找表
const CHARMAP_TO_CHAR: [Option<char>; 256] = init_decode_lut();

const fn init_decode_lut() -> [Option<char>; 256] {
    let mut lut = [None; 256];

    lut[0x00] = Some(' ');

    let mut i = 0;
    while i < 10 {
        lut[0xA1 + i] = Some((b'0' + i as u8) as char);
        i += 1;
    }

    lut[0xAB] = Some('!');
    lut[0xAC] = Some('?');
    lut[0xAD] = Some('.');
    lut[0xAE] = Some('-');
    lut[0xB4] = Some('\'');
    lut[0xB8] = Some(',');
    lut[0xBA] = Some('/');

    let mut i = 0;
    while i < 26 {
        lut[0xBB + i] = Some((b'A' + i as u8) as char);
        lut[0xD5 + i] = Some((b'a' + i as u8) as char);
        i += 1;
    }

    lut[0xF0] = Some(':');

    lut
}

/// 单个字符的编码，不在字符表中时返回 `None`
pub const fn encode_char(ch: char) -> Option<u8> {
    match ch {
        ' ' => Some(0x00),
        '0'..='9' => Some(0xA1 + (ch as u8 - b'0')),
        '!' => Some(0xAB),
        '?' => Some(0xAC),
        '.' => Some(0xAD),
        '-' => Some(0xAE),
        '\'' => Some(0xB4),
        ',' => Some(0xB8),
        '/' => Some(0xBA),
        'A'..='Z' => Some(0xBB + (ch as u8 - b'A')),
        'a'..='z' => Some(0xD5 + (ch as u8 - b'a')),
        ':' => Some(0xF0),
        _ => None,
    }
}

pub fn decode_byte(byte: u8) -> Option<char> {
    CHARMAP_TO_CHAR[usize::from(byte)]
}

/// 编码一段文字，末尾追加 EOS
pub fn encode(text: &str) -> Result<Vec<u8>, CharmapError> {
    let mut out = Vec::with_capacity(text.len() + 1);
    for (index, ch) in text.chars().enumerate() {
        let byte = encode_char(ch).ok_or(CharmapError::Unencodable { ch, index })?;
        out.push(byte);
    }
    out.push(EOS);
    Ok(out)
}

/// 解码到第一个 EOS 为止，EOS 之后的字节忽略
pub fn decode(bytes: &[u8]) -> Result<String, CharmapError> {
    let end = bytes
        .iter()
        .position(|&b| b == EOS)
        .ok_or(CharmapError::MissingTerminator)?;

    bytes[..end]
        .iter()
        .enumerate()
        .map(|(index, &byte)| decode_byte(byte).ok_or(CharmapError::UnknownByte { byte, index }))
        .collect()
}

/// 编码后的职业名表，每项以 EOS 结尾并用 EOS 填充
pub static ENCODED_CLASS_NAMES: [[u8; CLASS_NAME_LENGTH + 1]; NUM_CLASSES] =
    encode_name_table(&NAMES);

const fn encode_name_table(
    names: &[&str; NUM_CLASSES],
) -> [[u8; CLASS_NAME_LENGTH + 1]; NUM_CLASSES] {
    let mut table = [[EOS; CLASS_NAME_LENGTH + 1]; NUM_CLASSES];
    let mut i = 0;
    while i < NUM_CLASSES {
        let name = names[i].as_bytes();
        assert!(name.len() <= CLASS_NAME_LENGTH, "class name is too long");
        let mut j = 0;
        while j < name.len() {
            assert!(name[j].is_ascii(), "class name is not ASCII");
            table[i][j] = match encode_char(name[j] as char) {
                Some(byte) => byte,
                None => panic!("class name has a character outside the charmap"),
            };
            j += 1;
        }
        i += 1;
    }
    table
}

/// 职业编号对应的编码名称（含 EOS）
pub(crate) fn encoded_name_for(class_id: u8) -> &'static [u8] {
    let entry = &ENCODED_CLASS_NAMES[usize::from(class_id)];
    let end = entry
        .iter()
        .position(|&b| b == EOS)
        .map_or(entry.len(), |i| i + 1);
    &entry[..end]
}
