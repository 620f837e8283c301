//! Element 查找表（CSV，首行为表头）
//!
//! 启动时加载一次，之后只读；显式构造、按引用传递给需要的地方。
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::TableError;

/// 一行 Element 数据：列按表头顺序保存，`id` 恒为第一列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: u64,
    fields: Vec<(String, String)>,
}

impl Entry {
    pub fn id(&self) -> u64 { self.id }

    /// 按列名取值
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == column).map(|(_, v)| v.as_str())
    }

    /// 按表头顺序遍历所有列
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// id → Entry 映射
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    entries: HashMap<u64, Entry>,
}

impl ElementTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let file = File::open(path).map_err(|source| TableError::Io { path: path.to_path_buf(), source })?;
        let table = Self::from_reader(file)?;
        debug!(path = %path.display(), entries = table.len(), "element table loaded");
        Ok(table)
    }

    /// 解析 CSV：
    /// - 必须有 `id` 列
    /// - 空行跳过；`id` 取开头的十进制数字（`60abc`、`60.0` 均为 60），没有数字的行跳过
    /// - 重复 id 以后出现的为准
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);
        let headers = reader.headers()?.clone();
        let id_col = headers.iter().position(|h| h == "id").ok_or(TableError::MissingIdColumn)?;

        let mut entries = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let Some(id) = record.get(id_col).and_then(leading_integer) else { continue };

            let mut fields = Vec::with_capacity(headers.len());
            fields.push(("id".to_string(), id.to_string()));
            for (column, value) in headers.iter().zip(record.iter()) {
                if column == "id" { continue; }
                fields.push((column.to_string(), value.to_string()));
            }
            entries.insert(id, Entry { id, fields });
        }

        Ok(Self { entries })
    }

    pub fn get(&self, id: u64) -> Option<&Entry> { self.entries.get(&id) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// 取字符串开头的非负十进制整数（允许前导空白与 `+`），其余部分忽略
fn leading_integer(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 { return None; }
    s[..digits].parse().ok()
}
