//常用结构体

/// 尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// 创建尺寸
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 宽或高为 0
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// 长边
    pub fn longest_side(&self) -> u32 {
        self.width.max(self.height)
    }
}

/// 等比缩放尺寸, 使长边不超过 `max_dimension`
///
/// 长边未超过限制时原样返回, 缩放后宽高最小为 1
///
/// # 参数
///
/// - `size` - 原始尺寸
/// - `max_dimension` - 长边上限
pub fn fit_within(size: Size, max_dimension: u32) -> Size {
    if max_dimension == 0 || size.is_empty() || size.longest_side() <= max_dimension {
        return size;
    }

    let scale = max_dimension as f64 / size.longest_side() as f64;
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max_dimension);

    if size.width >= size.height {
        Size::new(max_dimension, scaled(size.height))
    } else {
        Size::new(scaled(size.width), max_dimension)
    }
}

/// 合并连续空白字符为单个空格, 并去除首尾空白
///
/// # 参数
///
/// - `s` - 字符串
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
