use std::cell::RefCell;

use anyhow::{Context, Result, anyhow, bail};
use common::Size;
use image::RgbaImage;
use tesseract::Tesseract;
use tracing::debug;

use crate::ocr::{Ocr, OcrResult};

/// RGBA 每像素字节数
const BYTES_PER_PIXEL: i32 = 4;

/// 基于 Tesseract 的 OCR 实现
pub struct TesseractOcr {
    // tesseract 的接口按值传递引擎句柄, 调用失败时句柄随之释放
    engine: RefCell<Option<Tesseract>>,
    language: String,
    dpi: Option<i32>,
}

impl TesseractOcr {
    /// 创建 TesseractOcr 实例
    ///
    /// # 参数
    ///
    /// * `data_path` - tessdata 目录, 为空时使用引擎默认查找路径 (含 `TESSDATA_PREFIX`)
    /// * `language` - 语言包名称, 如 `eng`
    /// * `dpi` - 图片分辨率, 为空时由引擎自行估算
    pub fn new(data_path: Option<&str>, language: &str, dpi: Option<i32>) -> Result<TesseractOcr> {
        let engine = Tesseract::new(data_path, Some(language)).map_err(|e| {
            anyhow!(
                "Tesseract 初始化失败 (语言: {}, 数据目录: {}): {}",
                language,
                data_path.unwrap_or("默认"),
                e
            )
        })?;

        debug!("Tesseract OCR 引擎加载成功, 语言: {}", language);

        Ok(TesseractOcr {
            engine: RefCell::new(Some(engine)),
            language: language.to_string(),
            dpi,
        })
    }

    /// 引擎使用的语言包
    pub fn language(&self) -> &str {
        &self.language
    }

    /// 将图片交给引擎识别, 返回识别后的引擎与结果
    ///
    /// # 参数
    ///
    /// * `engine` - 引擎句柄
    /// * `image` - 输入图像
    fn run_engine(&self, engine: Tesseract, image: &RgbaImage) -> Result<(Tesseract, OcrResult)> {
        let width = i32::try_from(image.width()).context("图片宽度超出范围")?;
        let height = i32::try_from(image.height()).context("图片高度超出范围")?;
        let bytes_per_line = width
            .checked_mul(BYTES_PER_PIXEL)
            .context("图片行字节数超出范围")?;

        let mut engine = engine
            .set_frame(image.as_raw(), width, height, BYTES_PER_PIXEL, bytes_per_line)
            .map_err(|e| anyhow!("设置识别图片失败: {}", e))?;
        if let Some(dpi) = self.dpi {
            engine = engine.set_source_resolution(dpi);
        }

        let mut engine = engine
            .recognize()
            .map_err(|e| anyhow!("文字识别失败: {}", e))?;
        let text = engine
            .get_text()
            .map_err(|e| anyhow!("获取识别文本失败: {}", e))?;
        let confidence = engine.mean_text_conf() as f32;

        Ok((engine, OcrResult { text, confidence }))
    }
}

impl Ocr for TesseractOcr {
    /// 识别图像中的文本
    ///
    /// # 参数
    ///
    /// * `image` - 输入图像
    fn recognize(&self, image: &RgbaImage) -> Result<OcrResult> {
        let size = Size::new(image.width(), image.height());
        if size.is_empty() {
            bail!("图片尺寸为空: {}x{}", size.width, size.height);
        }

        let mut slot = self.engine.borrow_mut();
        let engine = slot.take().ok_or_else(|| anyhow!("OCR 引擎不可用"))?;
        let (engine, result) = self.run_engine(engine, image)?;
        *slot = Some(engine);

        debug!(
            "识别结果: {} 个字符, 置信度: {}",
            result.text.chars().count(),
            result.confidence
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_new_with_missing_data_path() {
        let result = TesseractOcr::new(Some("/nonexistent/tessdata"), "eng", None);
        assert!(result.is_err());
    }

    #[test]
    #[ignore = "需要安装 Tesseract 英文语言包"]
    fn test_recognize_blank_image() {
        let ocr = TesseractOcr::new(None, "eng", Some(300)).unwrap();
        let image = RgbaImage::from_pixel(200, 100, Rgba([255, 255, 255, 255]));
        let result = ocr.recognize(&image).unwrap();
        assert!(result.text.trim().is_empty());
    }

    #[test]
    #[ignore = "需要安装 Tesseract 英文语言包"]
    fn test_recognize_empty_image() {
        let ocr = TesseractOcr::new(None, "eng", None).unwrap();
        let image = RgbaImage::new(0, 0);
        assert!(ocr.recognize(&image).is_err());
        // 空图片在交给引擎前被拒绝, 引擎仍可使用
        let image = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
        assert!(ocr.recognize(&image).is_ok());
    }
}
