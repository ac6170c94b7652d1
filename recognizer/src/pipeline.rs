use anyhow::Result;
use common::{Size, collapse_whitespace};
use ocr::Ocr;
use tracing::{debug, info};

use crate::{
    args::Args,
    error::RecognizerError,
    picture::{Preprocess, load_image},
    sink::OutputSink,
};

/// 日志中预览识别文本的最大字符数
const PREVIEW_CHARS: usize = 60;

/// 一次识别的结果摘要
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: String,
    pub image_size: Size,
    pub chars: usize,
    pub confidence: f32,
}

/// 识别流程: 打开输出文件 -> 初始化引擎 -> 解码图片 -> 识别 -> 写入结果
pub struct Pipeline {
    image_path: String,
    output: String,
    preprocess: Preprocess,
}

impl Pipeline {
    /// 创建识别流程
    ///
    /// # 参数
    ///
    /// * `image_path` - 待识别的图片路径
    /// * `output` - 输出文件路径
    /// * `preprocess` - 图片预处理配置
    pub fn new(image_path: &str, output: &str, preprocess: Preprocess) -> Self {
        Self {
            image_path: image_path.to_string(),
            output: output.to_string(),
            preprocess,
        }
    }

    /// 根据命令行参数创建识别流程
    ///
    /// # 参数
    ///
    /// * `args` - 命令行参数
    pub fn from_args(args: &Args) -> Self {
        Self::new(
            &args.image,
            &args.output,
            Preprocess {
                grayscale: args.grayscale,
                max_dimension: args.max_dimension,
            },
        )
    }

    /// 执行识别
    ///
    /// 输出文件先于引擎打开, 引擎初始化或识别失败时输出文件保持为空.
    /// 所有资源在任一返回路径上按获取的逆序释放.
    ///
    /// # 参数
    ///
    /// * `init_engine` - OCR 引擎初始化函数
    pub fn run<O, F>(&self, init_engine: F) -> Result<RunSummary, RecognizerError>
    where
        O: Ocr,
        F: FnOnce() -> Result<O>,
    {
        let mut sink = OutputSink::open(&self.output)?;

        let engine = init_engine().map_err(RecognizerError::Engine)?;

        let image = load_image(&self.image_path)?;
        let image = self.preprocess.apply(image);
        let image_size = Size::new(image.width(), image.height());

        info!(
            "开始识别图片: {} ({}x{})",
            self.image_path, image_size.width, image_size.height
        );
        let result = engine.recognize(&image).map_err(RecognizerError::Recognize)?;
        debug!("识别文本预览: {}", preview(&result.text));

        sink.write_text(&result.text)?;
        let output = sink.path().to_string();
        sink.finish()?;

        Ok(RunSummary {
            output,
            image_size,
            chars: result.text.chars().count(),
            confidence: result.confidence,
        })
    }
}

/// 截取识别文本用于日志预览
fn preview(text: &str) -> String {
    let text = collapse_whitespace(text);
    if text.chars().count() <= PREVIEW_CHARS {
        return text;
    }
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
