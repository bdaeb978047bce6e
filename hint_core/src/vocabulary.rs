/// 词表抽象：core 不关心关键字来自语法后端/文件/内存。
///
/// 约定：
/// - `words()` 按原始顺序返回；同分候选的相对顺序即词表顺序（排序是稳定的）
/// - 空词表是合法输入，排序结果为空，不是错误
pub trait Vocabulary: Send + Sync {
    fn words(&self) -> &[String];

    fn is_empty(&self) -> bool {
        self.words().is_empty()
    }
}

impl Vocabulary for Vec<String> {
    fn words(&self) -> &[String] {
        self
    }
}

impl Vocabulary for [String] {
    fn words(&self) -> &[String] {
        self
    }
}
