// src/classes/src/class.rs

use std::fmt;
use std::str::FromStr;

use bincode::{Decode, Encode};
use error::ClassError;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{charmap, names};

/// 职业总数
pub const NUM_CLASSES: usize = 13;

pub const CLASS_ARTIFICER: u8 = Class::Artificer as u8;
pub const CLASS_BARBARIAN: u8 = Class::Barbarian as u8;
pub const CLASS_BARD: u8 = Class::Bard as u8;
pub const CLASS_CLERIC: u8 = Class::Cleric as u8;
pub const CLASS_FIGHTER: u8 = Class::Fighter as u8;
pub const CLASS_MONK: u8 = Class::Monk as u8;
pub const CLASS_RANGER: u8 = Class::Ranger as u8;
pub const CLASS_WIZARD: u8 = Class::Wizard as u8;
pub const CLASS_WARLOCK: u8 = Class::Warlock as u8;
pub const CLASS_SORCERER: u8 = Class::Sorcerer as u8;
pub const CLASS_PALADIN: u8 = Class::Paladin as u8;
pub const CLASS_THIEF: u8 = Class::Thief as u8;
pub const CLASS_DRUID: u8 = Class::Druid as u8;

/// 职业枚举
///
/// 判别值就是职业编号，存档（bincode）里写入的也是这个编号。
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Encode,
    Decode,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum Class {
    Artificer = 0,
    Barbarian = 1,
    Bard = 2,
    Cleric = 3,
    Fighter = 4,
    Monk = 5,
    Ranger = 6,
    Wizard = 7,
    Warlock = 8,
    Sorcerer = 9,
    Paladin = 10,
    Thief = 11,
    Druid = 12,
}

const _: () = assert!(<Class as EnumCount>::COUNT == NUM_CLASSES);

impl Class {
    /// 按编号排列的全部职业
    pub const ALL: [Class; NUM_CLASSES] = [
        Class::Artificer,
        Class::Barbarian,
        Class::Bard,
        Class::Cleric,
        Class::Fighter,
        Class::Monk,
        Class::Ranger,
        Class::Wizard,
        Class::Warlock,
        Class::Sorcerer,
        Class::Paladin,
        Class::Thief,
        Class::Druid,
    ];

    /// 职业编号
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Class> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// 显示名称
    pub fn name(self) -> &'static str {
        names::name_for(self.id())
    }

    /// 以 EOS 结尾的字符表编码名称
    pub fn encoded_name(self) -> &'static [u8] {
        charmap::encoded_name_for(self.id())
    }

    /// 外部常量名，例如 `CLASS_WIZARD`
    pub fn constant_name(self) -> &'static str {
        match self {
            Class::Artificer => "CLASS_ARTIFICER",
            Class::Barbarian => "CLASS_BARBARIAN",
            Class::Bard => "CLASS_BARD",
            Class::Cleric => "CLASS_CLERIC",
            Class::Fighter => "CLASS_FIGHTER",
            Class::Monk => "CLASS_MONK",
            Class::Ranger => "CLASS_RANGER",
            Class::Wizard => "CLASS_WIZARD",
            Class::Warlock => "CLASS_WARLOCK",
            Class::Sorcerer => "CLASS_SORCERER",
            Class::Paladin => "CLASS_PALADIN",
            Class::Thief => "CLASS_THIEF",
            Class::Druid => "CLASS_DRUID",
        }
    }
}

impl TryFrom<u8> for Class {
    type Error = ClassError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Class::from_id(id).ok_or(ClassError::UnknownId(id))
    }
}

impl From<Class> for u8 {
    fn from(class: Class) -> Self {
        class.id()
    }
}

/// 不区分大小写，接受显示名称或常量名
impl FromStr for Class {
    type Err = ClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim();
        Class::iter()
            .find(|class| {
                class.name().eq_ignore_ascii_case(query)
                    || class.constant_name().eq_ignore_ascii_case(query)
            })
            .ok_or_else(|| ClassError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
