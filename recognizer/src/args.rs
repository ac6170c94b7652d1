use clap::Parser;
use tracing::Level;

/// 识别图片中的文字并写入文本文件
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 待识别的图片路径
    pub image: String,

    /// 识别结果输出文件路径 (每次运行覆盖)
    #[arg(short, long, default_value = "ocr_output.txt")]
    pub output: String,

    /// Tesseract 语言包
    #[arg(short, long, default_value = "eng")]
    pub lang: String,

    /// tessdata 目录, 默认使用 Tesseract 自带的查找路径
    #[arg(long)]
    pub tessdata: Option<String>,

    /// 图片分辨率 (DPI), 默认由引擎估算
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    pub dpi: Option<i32>,

    /// 识别前转为灰度图
    #[arg(long, default_value_t = false)]
    pub grayscale: bool,

    /// 识别前等比缩小图片, 使长边不超过该值 (单位: 像素)
    #[arg(long)]
    pub max_dimension: Option<u32>,

    /// 日志等级 (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "info")]
    pub log_level: Level,

    /// 日志文件路径, 默认只输出到标准错误
    #[arg(long)]
    pub log_file: Option<String>,

    /// 追加日志到文件
    #[arg(long, default_value_t = false)]
    pub append_log: bool,
}

impl Args {
    /// 创建命令行参数解析器
    pub fn new() -> Self {
        Self::parse()
    }
}
