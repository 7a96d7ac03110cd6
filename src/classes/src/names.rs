// src/classes/src/names.rs

//! 职业显示名称表
//!
//! 按职业编号索引的只读常量表。表的长度由 [`NUM_CLASSES`] 决定，
//! 缺项、空名称或重复名称都会在编译期报错。

use error::ClassError;

use crate::class::{Class, NUM_CLASSES};

pub(crate) const NAMES: [&str; NUM_CLASSES] = {
    let mut names = [""; NUM_CLASSES];
    names[Class::Artificer as usize] = "Artificer";
    names[Class::Barbarian as usize] = "Barbarian";
    names[Class::Bard as usize] = "Bard";
    names[Class::Cleric as usize] = "Cleric";
    names[Class::Fighter as usize] = "Fighter";
    names[Class::Monk as usize] = "Monk";
    names[Class::Ranger as usize] = "Ranger";
    names[Class::Wizard as usize] = "Wizard";
    names[Class::Warlock as usize] = "Warlock";
    names[Class::Sorcerer as usize] = "Sorcerer";
    names[Class::Paladin as usize] = "Paladin";
    names[Class::Thief as usize] = "Thief";
    names[Class::Druid as usize] = "Druid";
    names
};

/// 职业名表，下标为职业编号
pub static CLASS_NAMES: [&str; NUM_CLASSES] = NAMES;

const _: () = {
    let mut i = 0;
    while i < NUM_CLASSES {
        assert!(!NAMES[i].is_empty(), "class name table has a missing entry");
        let mut j = i + 1;
        while j < NUM_CLASSES {
            assert!(!same_bytes(NAMES[i], NAMES[j]), "class name table has a duplicate entry");
            j += 1;
        }
        i += 1;
    }
};

const fn same_bytes(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// 按编号查询职业名称
///
/// `class_id` 必须小于 [`NUM_CLASSES`]，越界时 panic。
/// 编号来自不受信任的输入时使用 [`try_name_for`]。
pub fn name_for(class_id: u8) -> &'static str {
    CLASS_NAMES[usize::from(class_id)]
}

pub fn try_name_for(class_id: u8) -> Result<&'static str, ClassError> {
    CLASS_NAMES
        .get(usize::from(class_id))
        .copied()
        .ok_or(ClassError::UnknownId(class_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{CLASS_ARTIFICER, CLASS_DRUID, CLASS_PALADIN, CLASS_THIEF, CLASS_WIZARD};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn table_matches_class_order() {
        assert_eq!(
            CLASS_NAMES,
            [
                "Artificer",
                "Barbarian",
                "Bard",
                "Cleric",
                "Fighter",
                "Monk",
                "Ranger",
                "Wizard",
                "Warlock",
                "Sorcerer",
                "Paladin",
                "Thief",
                "Druid",
            ]
        );
    }

    #[test]
    fn every_id_has_a_name() {
        assert_eq!(CLASS_NAMES.len(), NUM_CLASSES);
        for id in 0..NUM_CLASSES as u8 {
            assert!(!name_for(id).is_empty());
        }
    }

    #[test]
    fn lookup_by_constant() {
        assert_eq!(name_for(CLASS_WIZARD), "Wizard");
        assert_eq!(name_for(CLASS_ARTIFICER), "Artificer");
        assert_eq!(name_for(CLASS_DRUID), "Druid");
        assert_eq!(name_for(CLASS_PALADIN), "Paladin");
        assert_eq!(name_for(CLASS_THIEF), "Thief");
    }

    #[test]
    fn names_are_unique() {
        let unique: HashSet<_> = CLASS_NAMES.iter().collect();
        assert_eq!(unique.len(), NUM_CLASSES);
    }

    #[test]
    fn checked_lookup() {
        assert_eq!(try_name_for(3), Ok("Cleric"));
        assert_eq!(try_name_for(13), Err(ClassError::UnknownId(13)));
    }

    #[test]
    #[should_panic]
    fn unchecked_lookup_out_of_range_panics() {
        name_for(NUM_CLASSES as u8);
    }

    #[test]
    fn same_bytes_compares_content() {
        assert!(same_bytes("Bard", "Bard"));
        assert!(!same_bytes("Bard", "Barbarian"));
        assert!(!same_bytes("Monk", "Monks"));
    }
}
