use std::fs::File;
use std::io::Write;

use tracing::debug;

use crate::error::RecognizerError;

/// 识别结果输出文件
///
/// 打开时清空已有内容, 释放时关闭文件
pub struct OutputSink {
    path: String,
    file: File,
}

impl OutputSink {
    /// 以覆盖模式打开输出文件
    ///
    /// # 参数
    ///
    /// * `path` - 输出文件路径
    pub fn open(path: &str) -> Result<Self, RecognizerError> {
        let file = File::create(path).map_err(|source| RecognizerError::Sink {
            path: path.to_string(),
            source,
        })?;
        debug!("输出文件已打开: {}", path);
        Ok(Self {
            path: path.to_string(),
            file,
        })
    }

    /// 输出文件路径
    pub fn path(&self) -> &str {
        &self.path
    }

    /// 原样写入文本, 不追加换行
    ///
    /// # 参数
    ///
    /// * `text` - 待写入的文本
    pub fn write_text(&mut self, text: &str) -> Result<(), RecognizerError> {
        self.file
            .write_all(text.as_bytes())
            .map_err(|source| self.write_error(source))
    }

    /// 刷新写入并关闭文件
    pub fn finish(mut self) -> Result<(), RecognizerError> {
        self.file
            .flush()
            .map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: std::io::Error) -> RecognizerError {
        RecognizerError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_open_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content").unwrap();

        let sink = OutputSink::open(path.to_str().unwrap()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        sink.finish().unwrap();
    }

    #[test]
    fn test_write_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = OutputSink::open(path.to_str().unwrap()).unwrap();
        sink.write_text("第一行\nsecond line").unwrap();
        sink.finish().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "第一行\nsecond line");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_to_character_device() {
        let mut sink = OutputSink::open("/dev/null").unwrap();
        sink.write_text("HELLO").unwrap();
        sink.finish().unwrap();
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let result = OutputSink::open(path.to_str().unwrap());
        assert!(matches!(result, Err(RecognizerError::Sink { .. })));
        assert!(!path.exists());
    }
}
