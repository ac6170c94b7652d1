use common::{Size, fit_within};
use image::{
    DynamicImage, ImageError, ImageReader, Rgba, RgbaImage,
    imageops::{self, FilterType},
};
use tracing::{debug, info};

use crate::error::RecognizerError;

/// 读取并解码图片
///
/// 图片格式按文件内容识别, 与扩展名无关.
/// 透明像素按白色背景合成, OCR 引擎不处理透明通道
///
/// # 参数
///
/// * `path` - 图片路径
pub fn load_image(path: &str) -> Result<RgbaImage, RecognizerError> {
    let image = decode(path).map_err(|source| RecognizerError::Decode {
        path: path.to_string(),
        source,
    })?;
    debug!(
        "图片解码成功: {}, {}x{}, {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );

    let mut image = image.to_rgba8();
    flatten_alpha(&mut image);
    Ok(image)
}

/// 按文件内容猜测格式并解码, 猜测失败时沿用扩展名对应的格式
fn decode(path: &str) -> Result<DynamicImage, ImageError> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// 将透明像素合成到白色背景上
///
/// # 参数
///
/// * `image` - 待处理的图像
fn flatten_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a == u8::MAX {
            continue;
        }
        let blend = |c: u8| ((c as u32 * a as u32 + 255 * (255 - a as u32) + 127) / 255) as u8;
        *pixel = Rgba([blend(r), blend(g), blend(b), u8::MAX]);
    }
}

/// 识别前的图片预处理
#[derive(Debug, Clone, Copy, Default)]
pub struct Preprocess {
    pub grayscale: bool,
    pub max_dimension: Option<u32>,
}

impl Preprocess {
    /// 是否需要处理
    pub fn is_noop(&self) -> bool {
        !self.grayscale && self.max_dimension.is_none()
    }

    /// 按配置缩放图片并转为灰度
    ///
    /// # 参数
    ///
    /// * `image` - 输入图像
    pub fn apply(&self, image: RgbaImage) -> RgbaImage {
        if self.is_noop() {
            return image;
        }

        let mut image = image;
        if let Some(max_dimension) = self.max_dimension {
            let size = Size::new(image.width(), image.height());
            let target = fit_within(size, max_dimension);
            if target != size {
                info!(
                    "缩放图片: {}x{} -> {}x{}",
                    size.width, size.height, target.width, target.height
                );
                image = imageops::resize(&image, target.width, target.height, FilterType::Lanczos3);
            }
        }

        if self.grayscale {
            debug!("转换图片为灰度");
            let gray = DynamicImage::ImageRgba8(image).to_luma8();
            image = DynamicImage::ImageLuma8(gray).to_rgba8();
        }

        image
    }
}
