// src/classes/src/lib.rs

//! 职业数据
//!
//! 职业枚举、职业显示名称表，以及名称在游戏字符表中的编码形式。
//! 所有表都是编译期常量，进程内只读共享。

pub mod charmap;
pub mod class;
pub mod names;

pub use self::{
    charmap::{CLASS_NAME_LENGTH, ENCODED_CLASS_NAMES, EOS},
    class::{Class, NUM_CLASSES},
    names::{CLASS_NAMES, name_for, try_name_for},
};
pub use error::{CharmapError, ClassError};
