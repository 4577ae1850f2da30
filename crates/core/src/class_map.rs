use crate::types::{ClassKey, Declaration};
use indexmap::map::Iter;
use indexmap::IndexMap;

/// 工具类表：类名键 → CSS 声明
///
/// 功能：
/// - 重复键后者覆盖前者（保留首次插入的位置）
/// - 保持稳定输出顺序（使用 IndexMap）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap {
    entries: IndexMap<ClassKey, Vec<Declaration>>,
}

impl ClassMap {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// 写入一个类，返回被覆盖的旧声明
    pub fn insert(
        &mut self,
        key: ClassKey,
        declarations: Vec<Declaration>,
    ) -> Option<Vec<Declaration>> {
        self.entries.insert(key, declarations)
    }

    /// 写入只有一条声明的类
    pub fn insert_one(&mut self, key: ClassKey, declaration: Declaration) {
        self.entries.insert(key, vec![declaration]);
    }

    /// 合并另一张表，`other` 中的键覆盖当前表
    pub fn union(mut self, other: ClassMap) -> ClassMap {
        for (key, decls) in other.entries {
            self.entries.insert(key, decls);
        }
        self
    }

    pub fn get(&self, key: &ClassKey) -> Option<&[Declaration]> {
        self.entries.get(key).map(|v| v.as_slice())
    }

    /// 按原始类名查找（如 "bg-blue-500/50"）
    pub fn get_by_name(&self, class_name: &str) -> Option<&[Declaration]> {
        self.get(&ClassKey::plain(class_name))
    }

    pub fn contains_key(&self, key: &ClassKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ClassKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> Iter<'_, ClassKey, Vec<Declaration>> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<(&ClassKey, &Vec<Declaration>)> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ClassMap {
    type Item = (&'a ClassKey, &'a Vec<Declaration>);
    type IntoIter = Iter<'a, ClassKey, Vec<Declaration>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(ClassKey, Vec<Declaration>)> for ClassMap {
    fn from_iter<T: IntoIterator<Item = (ClassKey, Vec<Declaration>)>>(iter: T) -> Self {
        let mut map = ClassMap::new();
        for (key, decls) in iter {
            map.insert(key, decls);
        }
        map
    }
}
