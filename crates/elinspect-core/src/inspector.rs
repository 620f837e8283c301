//! 扫描器 + 查找表 + 配置的组合入口（只读，可跨线程共享）
use crate::annotate::{annotate, Annotation};
use crate::config::Config;
use crate::error::ScanError;
use crate::hover::{hover, Hover};
use crate::scanner::Scanner;
use crate::table::ElementTable;
use crate::types::Occurrence;

#[derive(Debug, Clone)]
pub struct Inspector {
    config: Config,
    table: ElementTable,
    scanner: Scanner,
}

impl Inspector {
    /// 以 `config.all_targets()` 构建扫描器
    pub fn new(config: Config, table: ElementTable) -> Result<Self, ScanError> {
        let scanner = Scanner::new(&config.all_targets())?;
        Ok(Self { config, table, scanner })
    }

    pub fn config(&self) -> &Config { &self.config }

    pub fn table(&self) -> &ElementTable { &self.table }

    pub fn scanner(&self) -> &Scanner { &self.scanner }

    /// 行内注解；关闭 `enable_inline_decoration` 时恒为空
    pub fn annotations(&self, text: &str) -> Vec<Annotation> {
        self.annotate_occurrences(text, &self.scanner.scan(text))
    }

    /// 对已有的扫描结果生成注解（批量扫描需要同时统计命中数）
    pub fn annotate_occurrences(&self, text: &str, occurrences: &[Occurrence]) -> Vec<Annotation> {
        if !self.config.enable_inline_decoration {
            return Vec::new();
        }
        annotate(text, occurrences, &self.table, &self.config.format)
    }

    /// Hover；关闭 `enable_hover` 时恒为 None
    pub fn hover(&self, text: &str, offset: usize) -> Option<Hover> {
        if !self.config.enable_hover {
            return None;
        }
        hover(text, offset, &self.table, &self.config.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ElementTable {
        ElementTable::from_reader("id,alias,name_JP\n60,life,生命力\n100,str,筋力\n".as_bytes()).unwrap()
    }

    #[test]
    fn annotates_default_and_additional_targets() {
        let config = Config::from_toml(
            "format = \"$alias/$name_JP\"\n[[additional_targets]]\nfunction = \"Element.Create\"\narg_index = 1\n",
        )
        .unwrap();
        let inspector = Inspector::new(config, table()).unwrap();
        let notes = inspector.annotations("Evalue(60);\nElement.Create<T>(100);\nEvalue(7);");
        let texts: Vec<_> = notes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["life/生命力", "str/筋力"]);
    }

    #[test]
    fn toggles_disable_output() {
        let config = Config { enable_inline_decoration: false, enable_hover: false, ..Config::default() };
        let inspector = Inspector::new(config, table()).unwrap();
        assert!(inspector.annotations("Evalue(60)").is_empty());
        assert!(inspector.hover("Evalue(60)", 8).is_none());
    }

    #[test]
    fn hover_uses_configured_format() {
        let inspector = Inspector::new(Config::default(), table()).unwrap();
        let h = inspector.hover("x = 60;", 5).unwrap();
        assert!(h.markdown.starts_with("## **生命力**"));
    }
}
