use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognizerError {
    #[error("无法打开输出文件 {path}: {source}")]
    Sink { path: String, source: io::Error },
    #[error("无法初始化 OCR 引擎: {0:#}")]
    Engine(anyhow::Error),
    #[error("无法读取图片 {path}: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
    #[error("文字识别失败: {0:#}")]
    Recognize(anyhow::Error),
    #[error("写入输出文件 {path} 失败: {source}")]
    Write { path: String, source: io::Error },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
