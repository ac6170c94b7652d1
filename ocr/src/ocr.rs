use anyhow::Result;
use image::RgbaImage;

/// 整页识别结果
#[derive(Debug, Clone)]
pub struct OcrResult {
    /// 引擎输出的 UTF-8 文本, 未做任何处理
    pub text: String,
    /// 引擎给出的平均置信度, 取值 0-100
    pub confidence: f32,
}

/// OCR 引擎接口
pub trait Ocr {
    /// 识别整张图片中的文字, 版面分析由引擎完成
    ///
    /// # 参数
    ///
    /// * `image` - 已解码的图片, 透明通道会被忽略
    fn recognize(&self, image: &RgbaImage) -> Result<OcrResult>;
}
